use checkwords_common::money::NOT_US_CURRENCY_FORMAT;
use checkwords_core::converter::{hundreds, ones, tens};
use checkwords_core::Humanizer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn accepted_amounts_end_in_dollars(dollars in 0u64..1_000_000_000_000, cents in 0u8..100) {
        let words = Humanizer::default().humanize(&format!("{dollars}.{cents:02}"));
        prop_assert!(words.ends_with(" dollars"));
        prop_assert_eq!(words.contains("/100"), cents != 0);
        prop_assert!(!words.contains("  "));
        prop_assert_eq!(words.to_lowercase(), words.clone());
    }

    #[test]
    fn leading_zeros_do_not_change_words(dollars in 0u64..1_000_000_000, zeros in 1usize..3) {
        let humanizer = Humanizer::default();
        let plain = format!("{dollars}.00");
        let padded = format!("{}{dollars}.00", "0".repeat(zeros));
        prop_assert_eq!(humanizer.humanize(&padded), humanizer.humanize(&plain));
    }

    #[test]
    fn too_many_integer_digits_are_rejected(digits in "[1-9][0-9]{12,20}", cents in "[0-9]{2}") {
        let amount = format!("{digits}.{cents}");
        prop_assert_eq!(Humanizer::default().humanize(&amount), NOT_US_CURRENCY_FORMAT);
    }

    #[test]
    fn wrong_cent_width_is_rejected(dollars in "[0-9]{1,12}", cents in "[0-9]{3,5}|[0-9]") {
        let amount = format!("{dollars}.{cents}");
        prop_assert_eq!(Humanizer::default().humanize(&amount), NOT_US_CURRENCY_FORMAT);
    }

    #[test]
    fn anything_without_a_point_is_rejected(input in "[^.]*") {
        prop_assert_eq!(Humanizer::default().humanize(&input), NOT_US_CURRENCY_FORMAT);
    }

    #[test]
    fn tiers_agree_below_twenty(n in 0u64..20) {
        let word = ones::convert(n).unwrap();
        prop_assert_eq!(tens::convert(n).unwrap(), word);
        prop_assert_eq!(hundreds::convert(n).unwrap(), word);
    }
}
