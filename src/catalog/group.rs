//! Business groupings of catalog entries.
//!
//! Groups exist for listing and documentation only; nothing in resolution
//! depends on them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::types::CatalogError;

/// The business domain an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointGroup {
    /// Platform certificates, bills and media upload.
    Platform,
    /// Direct merchant payments and refunds.
    DirectTrade,
    /// Combined (multi-merchant) orders.
    CombineOrder,
    /// Pay score, pre-authorization and parking services.
    PayScore,
    DiscountCard,
    /// Coupon stocks ("favor").
    MarketingFavor,
    /// Merchant coupons ("busifavor").
    MarketingBusiFavor,
    MarketingPartnership,
    MarketingPayGift,
    /// Batch transfers and merchant fund queries.
    BatchTransfer,
    /// Service provider (partner) trade.
    PartnerTrade,
    ProfitSharing,
    BrandProfitSharing,
    /// Sub-merchant onboarding and settlement.
    SubMerchantApplyment,
    SmartGuide,
    GoldPlan,
    /// Ecommerce secondary merchant onboarding.
    EcommerceApplyment,
    /// Ecommerce profit sharing, subsidies, refunds and funds.
    Ecommerce,
    MallScore,
    /// Bank and region lookup.
    Capital,
}

impl EndpointGroup {
    /// Every group, in catalog order.
    pub const ALL: [EndpointGroup; 20] = [
        EndpointGroup::Platform,
        EndpointGroup::DirectTrade,
        EndpointGroup::CombineOrder,
        EndpointGroup::PayScore,
        EndpointGroup::DiscountCard,
        EndpointGroup::MarketingFavor,
        EndpointGroup::MarketingBusiFavor,
        EndpointGroup::MarketingPartnership,
        EndpointGroup::MarketingPayGift,
        EndpointGroup::BatchTransfer,
        EndpointGroup::PartnerTrade,
        EndpointGroup::ProfitSharing,
        EndpointGroup::BrandProfitSharing,
        EndpointGroup::SubMerchantApplyment,
        EndpointGroup::SmartGuide,
        EndpointGroup::GoldPlan,
        EndpointGroup::EcommerceApplyment,
        EndpointGroup::Ecommerce,
        EndpointGroup::MallScore,
        EndpointGroup::Capital,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointGroup::Platform => "platform",
            EndpointGroup::DirectTrade => "direct_trade",
            EndpointGroup::CombineOrder => "combine_order",
            EndpointGroup::PayScore => "pay_score",
            EndpointGroup::DiscountCard => "discount_card",
            EndpointGroup::MarketingFavor => "marketing_favor",
            EndpointGroup::MarketingBusiFavor => "marketing_busi_favor",
            EndpointGroup::MarketingPartnership => "marketing_partnership",
            EndpointGroup::MarketingPayGift => "marketing_pay_gift",
            EndpointGroup::BatchTransfer => "batch_transfer",
            EndpointGroup::PartnerTrade => "partner_trade",
            EndpointGroup::ProfitSharing => "profit_sharing",
            EndpointGroup::BrandProfitSharing => "brand_profit_sharing",
            EndpointGroup::SubMerchantApplyment => "sub_merchant_applyment",
            EndpointGroup::SmartGuide => "smart_guide",
            EndpointGroup::GoldPlan => "gold_plan",
            EndpointGroup::EcommerceApplyment => "ecommerce_applyment",
            EndpointGroup::Ecommerce => "ecommerce",
            EndpointGroup::MallScore => "mall_score",
            EndpointGroup::Capital => "capital",
        }
    }
}

impl fmt::Display for EndpointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndpointGroup {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        EndpointGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == wanted)
            .ok_or_else(|| CatalogError::UnknownGroup(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_round_trips_through_str() {
        for group in EndpointGroup::ALL {
            assert_eq!(group.as_str().parse::<EndpointGroup>().unwrap(), group);
        }
    }

    #[test]
    fn test_group_parse_is_lenient_on_case_and_dashes() {
        assert_eq!(
            "Marketing-Busi-Favor".parse::<EndpointGroup>().unwrap(),
            EndpointGroup::MarketingBusiFavor
        );
        assert!("payments".parse::<EndpointGroup>().is_err());
    }

    #[test]
    fn test_group_serde_matches_as_str() {
        let json = serde_json::to_string(&EndpointGroup::PayScore).unwrap();
        assert_eq!(json, "\"pay_score\"");
    }
}
