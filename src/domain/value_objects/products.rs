use serde::Deserialize;

/// Price block `type` value Dodo uses for subscription products.
pub const RECURRING_PRICE_TYPE: &str = "recurring_price";

/// Product payload returned by the Dodo Payments product endpoint. Only the
/// fields this service reads are modeled; everything else is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProductDetail {
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<ProductPrice>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProductPrice {
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub price: Option<i64>,
    pub currency: Option<String>,
    pub payment_frequency_interval: Option<String>,
}

impl ProductPrice {
    pub fn is_recurring(&self) -> bool {
        self.type_.as_deref() == Some(RECURRING_PRICE_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recurring_product_payload() {
        let payload = serde_json::json!({
            "product_id": "prod_123",
            "description": "Pro tier",
            "image": "https://cdn.example.com/pro.png",
            "price": {
                "type": "recurring_price",
                "price": 1200,
                "currency": "usd",
                "payment_frequency_interval": "Month",
                "payment_frequency_count": 1
            }
        });

        let product: ProductDetail = serde_json::from_value(payload).unwrap();
        assert_eq!(product.description.as_deref(), Some("Pro tier"));

        let price = product.price.unwrap();
        assert!(price.is_recurring());
        assert_eq!(price.price, Some(1200));
        assert_eq!(price.currency.as_deref(), Some("usd"));
        assert_eq!(price.payment_frequency_interval.as_deref(), Some("Month"));
    }

    #[test]
    fn parses_payload_without_price_block() {
        let payload = serde_json::json!({
            "description": "One-off credits pack"
        });

        let product: ProductDetail = serde_json::from_value(payload).unwrap();
        assert_eq!(product.image, None);
        assert_eq!(product.price, None);
    }

    #[test]
    fn one_time_price_is_not_recurring() {
        let price = ProductPrice {
            type_: Some("one_time_price".to_string()),
            price: Some(500),
            currency: Some("USD".to_string()),
            payment_frequency_interval: Some("Month".to_string()),
        };

        assert!(!price.is_recurring());
    }
}
