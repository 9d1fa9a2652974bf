use checkwords_common::config::Config;
use checkwords_common::error::ConversionError;
use checkwords_common::money::NOT_US_CURRENCY_FORMAT;
use checkwords_common::money::amount::Amount;
use checkwords_core::batch::{self, BatchSummary};
use checkwords_core::converter::group;
use checkwords_core::Humanizer;
use rstest::rstest;

/// Amounts as they would appear on printed cheques.
#[rstest]
#[case("2523.04", "two thousand five hundred twenty-three and 04/100 dollars")]
#[case("100.00", "one hundred dollars")]
#[case("1000000.00", "one million dollars")]
#[case("19.99", "nineteen and 99/100 dollars")]
#[case("20.00", "twenty dollars")]
#[case(
    "999999999.01",
    "nine hundred ninety-nine million nine hundred ninety-nine thousand nine hundred ninety-nine and 01/100 dollars"
)]
#[case("1001001.00", "one million one thousand one dollars")]
#[case("40000000000.40", "forty billion and 40/100 dollars")]
#[case("100000000001.00", "one hundred billion one dollars")]
fn humanizes_cheque_amounts(#[case] amount: &str, #[case] expected: &str) {
    assert_eq!(Humanizer::default().humanize(amount), expected);
}

#[rstest]
#[case("12.3")]
#[case("abc.00")]
#[case("12345678901234.00")]
#[case("1000000000000.00")]
#[case("$5.00")]
#[case("5.00 ")]
fn malformed_amounts_get_the_diagnostic(#[case] amount: &str) {
    assert_eq!(Humanizer::default().humanize(amount), NOT_US_CURRENCY_FORMAT);
}

#[test]
fn largest_amount_uses_billions() -> anyhow::Result<()> {
    let words = Humanizer::default().try_humanize("999999999999.99")?;
    assert!(words.starts_with("nine hundred ninety-nine billion"));
    assert!(words.ends_with(" and 99/100 dollars"));
    Ok(())
}

#[test]
fn try_humanize_reports_format_errors() {
    assert_eq!(
        Humanizer::default().try_humanize("1.5"),
        Err(ConversionError::Format {
            input: "1.5".to_string()
        })
    );
}

#[test]
fn render_accepts_a_parsed_amount() -> anyhow::Result<()> {
    let amount: Amount = "0042.07".parse()?;
    assert_eq!(
        Humanizer::default().render(&amount)?,
        "forty-two and 07/100 dollars"
    );
    Ok(())
}

#[test]
fn zero_handling_follows_config() {
    let spelled = Humanizer::new(&Config::default());
    let legacy = Humanizer::new(&Config {
        zero_words: false,
        ..Config::default()
    });

    assert_eq!(spelled.humanize("0.00"), "zero dollars");
    assert_eq!(legacy.humanize("0.00"), " dollars");
    assert_eq!(legacy.humanize("0.01"), " and 01/100 dollars");
}

#[test]
fn group_converter_rejects_beyond_billions() {
    assert_eq!(
        group::convert("5000000000000"),
        Err(ConversionError::UnsupportedMagnitude { digits: 13 })
    );
}

#[test]
fn batch_matches_single_conversions() {
    let inputs = ["2523.04", "nope", "0.00", "20.00", "12.3"];
    let humanizer = Humanizer::default();

    let conversions = batch::humanize_all(&humanizer, &inputs);

    let outputs: Vec<&str> = conversions.iter().map(|c| c.output.as_str()).collect();
    assert_eq!(
        outputs,
        vec![
            "two thousand five hundred twenty-three and 04/100 dollars",
            NOT_US_CURRENCY_FORMAT,
            "zero dollars",
            "twenty dollars",
            NOT_US_CURRENCY_FORMAT,
        ]
    );
    assert_eq!(
        BatchSummary::from_conversions(&conversions),
        BatchSummary {
            valid: 3,
            rejected: 2
        }
    );
}
