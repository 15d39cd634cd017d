use serde_json::json;

use super::*;

#[test]
fn builds_for_free_and_paid_prices() {
    let _free = PriceTag(PriceTagProps { price: json!("무료") });
    let _paid = PriceTag(PriceTagProps { price: json!(12000) });
}
