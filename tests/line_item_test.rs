use bigdecimal::BigDecimal;
use invoice_dashboard_rust::models::{compute_total, format_amount, LineItem, PriceInput};
use std::str::FromStr;

fn raw(description: &str, price: &str) -> LineItem {
    LineItem {
        description: description.to_string(),
        unit_price: PriceInput::Raw(price.to_string()),
    }
}

#[test]
fn invalid_price_coerces_to_zero() {
    let items = vec![
        raw("broken", "abc"),
        LineItem {
            description: "ok".to_string(),
            unit_price: PriceInput::Amount(BigDecimal::from(5)),
        },
    ];

    assert_eq!(compute_total(&items), BigDecimal::from(5));
}

#[test]
fn empty_sequence_sums_to_zero() {
    assert_eq!(compute_total(&[]), BigDecimal::from(0));
}

#[test]
fn missing_price_counts_as_zero() {
    let items = vec![LineItem {
        description: "no price".to_string(),
        unit_price: PriceInput::Missing,
    }];

    assert_eq!(compute_total(&items), BigDecimal::from(0));
}

#[test]
fn total_is_order_independent() {
    let a = raw("a", "12.5");
    let b = raw("b", "7");
    let c = raw("c", "80.25");

    let forward = compute_total(&[a.clone(), b.clone(), c.clone()]);
    let reversed = compute_total(&[c.clone(), b.clone(), a.clone()]);
    let rotated = compute_total(&[b, c, a]);

    assert_eq!(forward, reversed);
    assert_eq!(forward, rotated);
}

#[test]
fn decimal_text_is_summed_exactly() {
    let items = vec![raw("design", "150.5")];
    assert_eq!(
        compute_total(&items),
        BigDecimal::from_str("150.5").unwrap()
    );
}

#[test]
fn whitespace_around_price_is_tolerated() {
    let items = vec![raw("padded", "  42.10  ")];
    assert_eq!(
        compute_total(&items),
        BigDecimal::from_str("42.10").unwrap()
    );
}

#[test]
fn format_amount_pins_two_decimals() {
    assert_eq!(format_amount(&BigDecimal::from(300)), "300.00");
    assert_eq!(
        format_amount(&BigDecimal::from_str("150.5").unwrap()),
        "150.50"
    );
    assert_eq!(format_amount(&BigDecimal::from(0)), "0.00");
}

// 行项目来自 JSONB 快照, 单价可能是数字、文本或缺失
#[test]
fn wire_forms_all_deserialize() {
    let numeric: LineItem = serde_json::from_str(r#"{"description":"a","price":100}"#).unwrap();
    let text: LineItem = serde_json::from_str(r#"{"description":"b","price":"150.5"}"#).unwrap();
    let junk: LineItem = serde_json::from_str(r#"{"description":"c","price":"abc"}"#).unwrap();
    let absent: LineItem = serde_json::from_str(r#"{"description":"d"}"#).unwrap();
    let null: LineItem = serde_json::from_str(r#"{"description":"e","price":null}"#).unwrap();

    assert_eq!(numeric.unit_price.to_amount(), BigDecimal::from(100));
    assert_eq!(
        text.unit_price.to_amount(),
        BigDecimal::from_str("150.5").unwrap()
    );
    assert_eq!(junk.unit_price.to_amount(), BigDecimal::from(0));
    assert_eq!(absent.unit_price.to_amount(), BigDecimal::from(0));
    assert_eq!(null.unit_price.to_amount(), BigDecimal::from(0));
}
