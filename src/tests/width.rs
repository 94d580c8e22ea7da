//		Packages

use super::*;
use rubedo::sugar::s;



//		Tests

mod public_methods {
	use super::*;

	//		combine
	#[test]
	fn combine__fixed_with_fixed() {
		assert_eq!(Width::Fixed(4).combine(Width::Fixed(8)),  Width::Fixed(8));
		assert_eq!(Width::Fixed(8).combine(Width::Fixed(4)),  Width::Fixed(8));
		assert_eq!(Width::Fixed(32).combine(Width::Fixed(32)), Width::Fixed(32));
	}
	#[test]
	fn combine__unlimited_absorbs() {
		assert_eq!(Width::Fixed(4).combine(Width::Unlimited),  Width::Unlimited);
		assert_eq!(Width::Unlimited.combine(Width::Fixed(32)), Width::Unlimited);
		assert_eq!(Width::Unlimited.combine(Width::Unlimited), Width::Unlimited);
	}

	//		fits_within
	#[test]
	fn fits_within__fixed_into_fixed() {
		assert!( Width::Fixed(4).fits_within(Width::Fixed(4)));
		assert!( Width::Fixed(4).fits_within(Width::Fixed(8)));
		assert!(!Width::Fixed(8).fits_within(Width::Fixed(4)));
	}
	#[test]
	fn fits_within__fixed_into_unlimited() {
		assert!(Width::Fixed(4).fits_within(Width::Unlimited));
		assert!(Width::Fixed(32).fits_within(Width::Unlimited));
	}
	#[test]
	fn fits_within__unlimited() {
		assert!( Width::Unlimited.fits_within(Width::Unlimited));
		assert!(!Width::Unlimited.fits_within(Width::Fixed(32)));
	}

	//		is_fixed
	#[test]
	fn is_fixed() {
		assert!( Width::Fixed(4).is_fixed());
		assert!(!Width::Unlimited.is_fixed());
	}

	//		is_unlimited
	#[test]
	fn is_unlimited() {
		assert!( Width::Unlimited.is_unlimited());
		assert!(!Width::Fixed(4).is_unlimited());
	}
}

mod crate_methods {
	use super::*;

	//		initial_words
	#[test]
	fn initial_words() {
		assert_eq!(Width::Fixed(4).initial_words(),  4);
		assert_eq!(Width::Fixed(32).initial_words(), 32);
		assert_eq!(Width::Unlimited.initial_words(), Width::MIN);
	}

	//		is_valid
	#[test]
	fn is_valid() {
		assert!( Width::Fixed(4).is_valid());
		assert!( Width::Fixed(1024).is_valid());
		assert!( Width::Unlimited.is_valid());
		assert!(!Width::Fixed(3).is_valid());
		assert!(!Width::Fixed(0).is_valid());
	}
}

mod traits {
	use super::*;

	//		display
	#[test]
	fn display() {
		assert_eq!(Width::Fixed(4).to_string(),  s!("4B"));
		assert_eq!(Width::Fixed(32).to_string(), s!("32B"));
		assert_eq!(Width::Unlimited.to_string(), s!("Unlimited"));
	}
}
