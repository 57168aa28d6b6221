//! The endpoint table.
//!
//! Every WeChat Pay v3 request kind the client knows about, each bound to one
//! HTTP verb and one URI template. The table is expanded by `endpoints!` into
//! the `Endpoint` enum plus its const projections, so adding an entry is a
//! one-line change and the name set stays closed.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::catalog::group::EndpointGroup;
use crate::catalog::types::{CatalogError, CatalogResult};
use crate::catalog::verb::HttpVerb;
use crate::resolver::template::placeholders;

/// Sentinel marking the API root in every template.
///
/// Replaced verbatim by the resolver; never interpreted as a format string.
pub const DOMAIN_PLACEHOLDER: &str = "%s";

macro_rules! endpoints {
    ($(
        $(#[$doc:meta])*
        $variant:ident = $name:literal, $verb:ident, $group:ident, $template:literal;
    )*) => {
        /// A named WeChat Pay v3 request kind.
        ///
        /// The variant set is the catalog: an unknown request kind cannot be
        /// constructed, only misspelled as a string and rejected by [`lookup`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Endpoint {
            $(
                $(#[$doc])*
                $variant,
            )*
        }

        impl Endpoint {
            /// Every endpoint, in catalog order.
            pub const ALL: &'static [Endpoint] = &[$(Endpoint::$variant,)*];

            /// Stable symbolic name, e.g. `CLOSE`.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Endpoint::$variant => $name,)*
                }
            }

            pub const fn verb(&self) -> HttpVerb {
                match self {
                    $(Endpoint::$variant => HttpVerb::$verb,)*
                }
            }

            /// URI template, with the domain placeholder still in place.
            pub const fn template(&self) -> &'static str {
                match self {
                    $(Endpoint::$variant => $template,)*
                }
            }

            pub const fn group(&self) -> EndpointGroup {
                match self {
                    $(Endpoint::$variant => EndpointGroup::$group,)*
                }
            }
        }

        /// Look up an endpoint by its symbolic name (case-sensitive).
        pub fn lookup(name: &str) -> CatalogResult<Endpoint> {
            match name {
                $($name => Ok(Endpoint::$variant),)*
                _ => Err(CatalogError::NotFound(name.to_string())),
            }
        }
    };
}

endpoints! {
    // certificates, bills, media
    /// Download the platform certificates.
    Cert = "CERT", Get, Platform, "%s/v3/certificates";
    /// Download a bill file from a previously issued download URL.
    FileDownload = "FILE_DOWNLOAD", Get, Platform, "%s/v3/billdownload/file";
    /// Apply for a trade bill.
    TradeBill = "TRADE_BILL", Get, Platform, "%s/v3/bill/tradebill";
    /// Apply for a fund flow bill.
    FundFlowBill = "FUND_FLOW_BILL", Get, Platform, "%s/v3/bill/fundflowbill";
    /// Upload an image.
    MerchantMediaImg = "MERCHANT_MEDIA_IMG", Post, Platform, "%s/v3/merchant/media/upload";
    /// Upload a video.
    MerchantMediaVideo = "MERCHANT_MEDIA_VIDEO", Post, Platform, "%s/v3/merchant/media/video_upload";

    // direct merchant trade
    /// Place an order paid inside an official account or mini program.
    Jsapi = "JSAPI", Post, DirectTrade, "%s/v3/pay/transactions/jsapi";
    /// Place a QR code order.
    Native = "NATIVE", Post, DirectTrade, "%s/v3/pay/transactions/native";
    /// Place an in-app order.
    App = "APP", Post, DirectTrade, "%s/v3/pay/transactions/app";
    /// Place an H5 (mobile web) order.
    Mweb = "MWEB", Post, DirectTrade, "%s/v3/pay/transactions/h5";
    /// Close an order by merchant order number.
    Close = "CLOSE", Post, DirectTrade, "%s/v3/pay/transactions/out-trade-no/{out_trade_no}/close";
    /// Query an order by WeChat transaction id.
    TransactionTransactionId = "TRANSACTION_TRANSACTION_ID", Get, DirectTrade, "%s/v3/pay/transactions/id/{transaction_id}";
    /// Query an order by merchant order number.
    TransactionOutTradeNo = "TRANSACTION_OUT_TRADE_NO", Get, DirectTrade, "%s/v3/pay/transactions/out-trade-no/{out_trade_no}";
    /// Apply for a refund.
    Refund = "REFUND", Post, DirectTrade, "%s/v3/refund/domestic/refunds";
    /// Query a refund by merchant refund number.
    QueryRefund = "QUERY_REFUND", Get, DirectTrade, "%s/v3/refund/domestic/refunds/{out_refund_no}";

    // combined orders
    /// Combined order, in-app payment.
    CombineApp = "COMBINE_APP", Post, CombineOrder, "%s/v3/combine-transactions/app";
    /// Combined order, official account or mini program payment.
    CombineJsapi = "COMBINE_JSAPI", Post, CombineOrder, "%s/v3/combine-transactions/jsapi";
    /// Combined order, H5 payment.
    CombineMweb = "COMBINE_MWEB", Post, CombineOrder, "%s/v3/combine-transactions/h5";
    /// Combined order, QR code payment.
    CombineNative = "COMBINE_NATIVE", Post, CombineOrder, "%s/v3/combine-transactions/native";
    /// Query a combined order.
    CombineTransactionOutTradeNo = "COMBINE_TRANSACTION_OUT_TRADE_NO", Get, CombineOrder, "%s/v3/combine-transactions/out-trade-no/{combine_out_trade_no}";
    /// Close a combined order.
    CombineClose = "COMBINE_CLOSE", Post, CombineOrder, "%s/v3/combine-transactions/out-trade-no/{combine_out_trade_no}/close";

    // pay score
    /// Merchant pre-authorization.
    PayScorePermissions = "PAY_SCORE_PERMISSIONS", Post, PayScore, "%s/v3/payscore/permissions";
    /// Create and complete a service order in one call.
    PayScoreDirectComplete = "PAY_SCORE_DIRECT_COMPLETE", Post, PayScore, "%s/payscore/serviceorder/direct-complete";
    /// Query a user authorization by authorization code.
    PayScorePermissionsAuthCode = "PAY_SCORE_PERMISSIONS_AUTH_CODE", Get, PayScore, "%s/v3/payscore/permissions/authorization-code/{authorization_code}";
    /// Terminate a user authorization by authorization code.
    PayScoreTerminatePermissionsAuthCode = "PAY_SCORE_TERMINATE_PERMISSIONS_AUTH_CODE", Post, PayScore, "%s/v3/payscore/permissions/authorization-code/{authorization_code}/terminate";
    /// Query a user authorization by openid.
    PayScorePermissionsOpenid = "PAY_SCORE_PERMISSIONS_OPENID", Get, PayScore, "%s/v3/payscore/permissions/openid/{openid}";
    /// Terminate a user authorization by openid.
    PayScoreTerminatePermissionsOpenid = "PAY_SCORE_TERMINATE_PERMISSIONS_OPENID", Post, PayScore, "%s/v3/payscore/permissions/openid/{openid}/terminate";
    /// Query the user service state (legacy interface).
    PayScoreUserServiceState = "PAY_SCORE_USER_SERVICE_STATE", Get, PayScore, "%s/v3/payscore/user-service-state?service_id={service_id}&appid={appid}&openid={openid}";
    /// Create a pay-score service order.
    PayScoreCreateUserServiceOrder = "PAY_SCORE_CREATE_USER_SERVICE_ORDER", Post, PayScore, "%s/v3/payscore/serviceorder";
    /// Query a pay-score service order.
    PayScoreQueryUserServiceOrder = "PAY_SCORE_QUERY_USER_SERVICE_ORDER", Get, PayScore, "%s/v3/payscore/serviceorder";
    /// Cancel a pay-score service order.
    PayScoreCancelUserServiceOrder = "PAY_SCORE_CANCEL_USER_SERVICE_ORDER", Post, PayScore, "%s/v3/payscore/serviceorder/{out_order_no}/cancel";
    /// Modify the amount of a service order.
    PayScoreModifyUserServiceOrder = "PAY_SCORE_MODIFY_USER_SERVICE_ORDER", Post, PayScore, "%s/v3/payscore/serviceorder/{out_order_no}/modify";
    /// Complete a pay-score service order.
    PayScoreCompleteUserServiceOrder = "PAY_SCORE_COMPLETE_USER_SERVICE_ORDER", Post, PayScore, "%s/v3/payscore/serviceorder/{out_order_no}/complete";
    /// Request collection of an unpaid service order.
    PayScorePayUserServiceOrder = "PAY_SCORE_PAY_USER_SERVICE_ORDER", Post, PayScore, "%s/v3/payscore/serviceorder/{out_order_no}/pay";
    /// Synchronize service order information.
    PayScoreSyncUserServiceOrder = "PAY_SCORE_SYNC_USER_SERVICE_ORDER", Post, PayScore, "%s/v3/payscore/serviceorder/{out_order_no}/sync";
    /// Apply for the pay-score reconciliation bill.
    PayScoreMerchantBill = "PAY_SCORE_MERCHANT_BILL", Get, PayScore, "%s/v3/payscore/merchant-bill";
    /// Query the plate number service state.
    PayScoreParkingFind = "PAY_SCORE_PARKING_FIND", Get, PayScore, "%s/v3/vehicle/parking/services/find";
    /// Create a parking entry.
    PayScoreParkingParkings = "PAY_SCORE_PARKING_PARKINGS", Post, PayScore, "%s/v3/vehicle/parking/parkings";
    /// Submit a parking deduction.
    PayScoreParkingTransactionsParkings = "PAY_SCORE_PARKING_TRANSACTIONS_PARKINGS", Post, PayScore, "%s/v3/vehicle/transactions/parking";
    /// Query a parking order.
    PayScoreParkingTransactionsOuttradeno = "PAY_SCORE_PARKING_TRANSACTIONS_OUTTRADENO", Get, PayScore, "%s/v3/vehicle/transactions/out-trade-no/{out_trade_no}";

    // discount cards
    /// Pre-accept a discount card claim.
    DiscountCardPreRequest = "DISCOUNT_CARD_PRE_REQUEST", Post, DiscountCard, "%s/v3/discount-card/cards";
    /// Add user records to a discount card.
    DiscountCardAddUserRecords = "DISCOUNT_CARD_ADD_USER_RECORDS", Post, DiscountCard, "%s/v3/discount-card/cards/{out_card_code}/add-user-records";
    /// Query a discount card order.
    DiscountCardInfo = "DISCOUNT_CARD_INFO", Post, DiscountCard, "%s/v3/discount-card/cards/{out_card_code}";

    // marketing coupons (favor stocks)
    /// Create a coupon stock.
    MarketingFavorStocksCouponStocks = "MARKETING_FAVOR_STOCKS_COUPON_STOCKS", Post, MarketingFavor, "%s/v3/marketing/favor/coupon-stocks";
    /// Activate a coupon stock.
    MarketingFavorStocksStart = "MARKETING_FAVOR_STOCKS_START", Post, MarketingFavor, "%s/v3/marketing/favor/stocks/{stock_id}/start";
    /// Pause a coupon stock.
    MarketingFavorStocksPause = "MARKETING_FAVOR_STOCKS_PAUSE", Post, MarketingFavor, "%s/v3/marketing/favor/stocks/{stock_id}/pause";
    /// Send a coupon to a user, or list a user's coupons.
    MarketingFavorUsersCoupons = "MARKETING_FAVOR_USERS_COUPONS", Post, MarketingFavor, "%s/v3/marketing/favor/users/{openid}/coupons";
    /// Restart a coupon stock.
    MarketingFavorStocksRestart = "MARKETING_FAVOR_STOCKS_RESTART", Post, MarketingFavor, "%s/v3/marketing/favor/stocks/{stock_id}/restart";
    /// List coupon stocks by condition.
    MarketingFavorStocks = "MARKETING_FAVOR_STOCKS", Get, MarketingFavor, "%s/v3/marketing/favor/stocks";
    /// Query coupon stock details.
    MarketingFavorStocksDetail = "MARKETING_FAVOR_STOCKS_DETAIL", Get, MarketingFavor, "%s/v3/marketing/favor/stocks/{stock_id}";
    /// Query coupon details.
    MarketingFavorUsersCouponsDetail = "MARKETING_FAVOR_USERS_COUPONS_DETAIL", Get, MarketingFavor, "%s/v3/marketing/favor/users/{openid}/coupons/{coupon_id}";
    /// Query merchants a coupon stock applies to.
    MarketingFavorStocksMerchants = "MARKETING_FAVOR_STOCKS_MERCHANTS", Get, MarketingFavor, "%s/v3/marketing/favor/stocks/{stock_id}/merchants";
    /// Query items a coupon stock applies to.
    MarketingFavorStocksItems = "MARKETING_FAVOR_STOCKS_ITEMS", Get, MarketingFavor, "%s/v3/marketing/favor/stocks/{stock_id}/items";
    /// Download the redemption flow of a stock.
    MarketingFavorStocksUseFlow = "MARKETING_FAVOR_STOCKS_USE_FLOW", Get, MarketingFavor, "%s/v3/marketing/favor/stocks/{stock_id}/use-flow";
    /// Download the refund flow of a stock.
    MarketingFavorStocksRefundFlow = "MARKETING_FAVOR_STOCKS_REFUND_FLOW", Get, MarketingFavor, "%s/v3/marketing/favor/stocks/{stock_id}/refund-flow";
    /// Upload a marketing image.
    MarketingImageUpload = "MARKETING_IMAGE_UPLOAD", Post, MarketingFavor, "%s/v3/marketing/favor/media/image-upload";
    /// Set the redemption callback address.
    MarketingFavorCallbacks = "MARKETING_FAVOR_CALLBACKS", Post, MarketingFavor, "%s/v3/marketing/favor/callbacks";
    /// Send a consumption card coupon.
    MarketingFavorCouponsSend = "MARKETING_FAVOR_COUPONS_SEND", Post, MarketingFavor, "%s/v3/marketing/busifavor/coupons/{card_id}/send";

    // marketing merchant coupons
    /// Create a merchant coupon stock.
    MarketingBusiFavorCreateStocks = "MARKETING_BUSI_FAVOR_CREATE_STOCKS", Post, MarketingBusiFavor, "%s/v3/marketing/busifavor/stocks";
    /// Query merchant coupon stock details.
    MarketingBusiFavorStocksDetail = "MARKETING_BUSI_FAVOR_STOCKS_DETAIL", Get, MarketingBusiFavor, "%s/v3/marketing/busifavor/stocks/{stock_id}";
    /// Redeem a user coupon.
    MarketingBusiFavorCouponUse = "MARKETING_BUSI_FAVOR_COUPON_USE", Post, MarketingBusiFavor, "%s/v3/marketing/busifavor/coupons/use";
    /// List user coupons by filter.
    MarketingBusiFavorUserCoupons = "MARKETING_BUSI_FAVOR_USER_COUPONS", Get, MarketingBusiFavor, "%s/v3/marketing/busifavor/users/{openid}/coupons";
    /// Query a single user coupon.
    MarketingBusiFavorUserCoupon = "MARKETING_BUSI_FAVOR_USER_COUPON", Get, MarketingBusiFavor, "%s/v3/marketing/busifavor/users/{openid}/coupons/{coupon_code}/appids/{appid}";
    /// Upload pre-generated coupon codes.
    MarketingBusiFavorUploadCouponCodes = "MARKETING_BUSI_FAVOR_UPLOAD_COUPON_CODES", Post, MarketingBusiFavor, "%s/v3/marketing/busifavor/stocks/{stock_id}/couponcodes";
    /// Set the merchant coupon event callback address.
    MarketingBusiFavorSettingCallbacks = "MARKETING_BUSI_FAVOR_SETTING_CALLBACKS", Post, MarketingBusiFavor, "%s/v3/marketing/busifavor/callbacks";
    /// Query the merchant coupon event callback address.
    MarketingBusiFavorGetCallbacks = "MARKETING_BUSI_FAVOR_GET_CALLBACKS", Get, MarketingBusiFavor, "%s/v3/marketing/busifavor/callbacks";
    /// Associate order information with a coupon.
    MarketingBusiFavorAssociate = "MARKETING_BUSI_FAVOR_ASSOCIATE", Post, MarketingBusiFavor, "%s/v3/marketing/busifavor/coupons/associate";
    /// Disassociate order information from a coupon.
    MarketingBusiFavorDisassociate = "MARKETING_BUSI_FAVOR_DISASSOCIATE", Post, MarketingBusiFavor, "%s/v3/marketing/busifavor/coupons/disassociate";
    /// Modify a stock budget.
    MarketingBusiFavorBudget = "MARKETING_BUSI_FAVOR_BUDGET", Patch, MarketingBusiFavor, "%s/v3/marketing/busifavor/stocks/{stock_id}/budget";
    /// Modify merchant coupon basic information.
    MarketingBusiFavorUpdate = "MARKETING_BUSI_FAVOR_UPDATE", Patch, MarketingBusiFavor, "%s/v3/marketing/busifavor/stocks/{stock_id}";
    /// Return a coupon.
    MarketingBusiFavorReturn = "MARKETING_BUSI_FAVOR_RETURN", Post, MarketingBusiFavor, "%s/v3/marketing/busifavor/coupons/return";
    /// Deactivate a coupon.
    MarketingBusiFavorDeactivate = "MARKETING_BUSI_FAVOR_DEACTIVATE", Post, MarketingBusiFavor, "%s/v3/marketing/busifavor/coupons/deactivate";
    /// Pay a marketing subsidy.
    MarketingBusiFavorSubsidy = "MARKETING_BUSI_FAVOR_SUBSIDY", Post, MarketingBusiFavor, "%s/v3/marketing/busifavor/subsidy/pay-receipts";
    /// Query a marketing subsidy receipt.
    MarketingBusiFavorSubsidyQuery = "MARKETING_BUSI_FAVOR_SUBSIDY_QUERY", Get, MarketingBusiFavor, "%s/v3/marketing/busifavor/subsidy/pay-receipts/{subsidy_receipt_id}";

    // marketing partnerships
    /// Build a partnership.
    MarketingPartnershipsBuild = "MARKETING_PARTNERSHIPS_BUILD", Post, MarketingPartnership, "%s/v3/marketing/partnerships/build";
    /// List partnerships.
    MarketingPartnershipsGet = "MARKETING_PARTNERSHIPS_GET", Get, MarketingPartnership, "%s/v3/marketing/partnerships";

    // pay gift activities
    /// Create a spend-threshold gift activity.
    MarketingPaygiftactivity = "MARKETING_PAYGIFTACTIVITY", Post, MarketingPayGift, "%s/v3/marketing/paygiftactivity/unique-threshold-activity";
    /// Query activity details.
    MarketingPaygiftactivityDetail = "MARKETING_PAYGIFTACTIVITY_DETAIL", Get, MarketingPayGift, "%s/v3/marketing/paygiftactivity/activities/{activity_id}";
    /// List merchants issuing coupons for an activity.
    MarketingPaygiftactivityMch = "MARKETING_PAYGIFTACTIVITY_MCH", Get, MarketingPayGift, "%s/v3/marketing/paygiftactivity/activities/{activity_id}/merchants";
    /// List goods designated for an activity.
    MarketingPaygiftactivityGoods = "MARKETING_PAYGIFTACTIVITY_GOODS", Get, MarketingPayGift, "%s/v3/marketing/paygiftactivity/activities/{activity_id}/goods";
    /// Terminate an activity.
    MarketingPaygiftactivityTerminate = "MARKETING_PAYGIFTACTIVITY_TERMINATE", Post, MarketingPayGift, "%s/v3/marketing/paygiftactivity/activities/{activity_id}/terminate";
    /// Add issuing merchants to an activity.
    MarketingPaygiftactivityMchAdd = "MARKETING_PAYGIFTACTIVITY_MCH_ADD", Post, MarketingPayGift, "%s/v3/marketing/paygiftactivity/activities/{activity_id}/merchants/add";
    /// List pay-gift activities.
    MarketingPaygiftactivityActivities = "MARKETING_PAYGIFTACTIVITY_ACTIVITIES", Get, MarketingPayGift, "%s/v3/marketing/paygiftactivity/activities";
    /// Remove issuing merchants from an activity.
    MarketingPaygiftactivityMchDel = "MARKETING_PAYGIFTACTIVITY_MCH_DEL", Post, MarketingPayGift, "%s/v3/marketing/paygiftactivity/activities/{activity_id}/merchants/delete";

    // batch transfers and fund queries
    /// Start a batch transfer.
    BatchTransferReq = "BATCH_TRANSFER_REQ", Post, BatchTransfer, "%s/v3/transfer/batches";
    /// Query a batch by WeChat batch id.
    BatchTransferBatchId = "BATCH_TRANSFER_BATCH_ID", Get, BatchTransfer, "%s/v3/transfer/batches/batch-id/{batch_id}";
    /// Query a transfer detail by WeChat detail id.
    BatchTransferDetailWechat = "BATCH_TRANSFER_DETAIL_WECHAT", Get, BatchTransfer, "%s/v3/transfer/batches/batch-id/{batch_id}/details/detail-id/{detail_id}";
    /// Query a batch by merchant batch number.
    BatchTransferOutBatchNo = "BATCH_TRANSFER_OUT_BATCH_NO", Get, BatchTransfer, "%s/v3/transfer/batches/out-batch-no/{out_batch_no}";
    /// Query a transfer detail by merchant detail number.
    BatchTransferDetailMch = "BATCH_TRANSFER_DETAIL_MCH", Get, BatchTransfer, "%s/v3/transfer/batches/out-batch-no/{out_batch_no}/details/out-detail-no/{out_detail_no}";
    /// Apply for a transfer e-receipt.
    BatchTransferBillReceipt = "BATCH_TRANSFER_BILL_RECEIPT", Post, BatchTransfer, "%s/v3/transfer/bill-receipt";
    /// Query and download a transfer e-receipt.
    BatchTransferDownloadBill = "BATCH_TRANSFER_DOWNLOAD_BILL", Get, BatchTransfer, "%s/v3/transfer/bill-receipt/{out_batch_no}";
    /// Apply for a transfer detail e-receipt.
    BatchTransferElectronic = "BATCH_TRANSFER_ELECTRONIC", Post, BatchTransfer, "%s/v3/transfer-detail/electronic-receipts";
    /// Query a transfer detail e-receipt application.
    BatchTransferElectronicDetail = "BATCH_TRANSFER_ELECTRONIC_DETAIL", Get, BatchTransfer, "%s/v3/transfer-detail/electronic-receipts";
    /// Query the real-time account balance.
    BatchTransferFundBalance = "BATCH_TRANSFER_FUND_BALANCE", Get, BatchTransfer, "%s/v3/merchant/fund/balance/{account_type}";
    /// Query the end-of-day account balance.
    BatchTransferFundDayBalance = "BATCH_TRANSFER_FUND_DAY_BALANCE", Get, BatchTransfer, "%s/v3/merchant/fund/dayendbalance/{account_type}";
    /// Query incoming bank records.
    BatchTransferFundIncomeRecords = "BATCH_TRANSFER_FUND_INCOME_RECORDS", Get, BatchTransfer, "%s/v3/merchantfund/merchant/income-records";

    // service provider trade
    /// Service provider in-app order.
    AppPartner = "APP_PARTNER", Post, PartnerTrade, "%s/v3/pay/partner/transactions/app";
    /// Service provider official account or mini program order.
    JsapiPartner = "JSAPI_PARTNER", Post, PartnerTrade, "%s/v3/pay/partner/transactions/jsapi";
    /// Service provider QR code order.
    NativePartner = "NATIVE_PARTNER", Post, PartnerTrade, "%s/v3/pay/partner/transactions/native";
    /// Service provider H5 order.
    MwebPartner = "MWEB_PARTNER", Post, PartnerTrade, "%s/v3/pay/partner/transactions/h5";
    /// Service provider close order.
    ClosePartner = "CLOSE_PARTNER", Post, PartnerTrade, "%s/v3/pay/partner/transactions/out-trade-no/{out_trade_no}/close";
    /// Service provider query by WeChat transaction id.
    TransactionTransactionIdPartner = "TRANSACTION_TRANSACTION_ID_PARTNER", Get, PartnerTrade, "%s/v3/pay/partner/transactions/id/{transaction_id}";
    /// Service provider query by merchant order number.
    TransactionOutTradeNoPartner = "TRANSACTION_OUT_TRADE_NO_PARTNER", Get, PartnerTrade, "%s/v3/pay/partner/transactions/out-trade-no/{out_trade_no}";

    // profit sharing
    /// Request profit sharing.
    ProfitsharingOrders = "PROFITSHARING_ORDERS", Post, ProfitSharing, "%s/v3/profitsharing/orders";
    /// Query a profit sharing result.
    ProfitsharingOrdersResult = "PROFITSHARING_ORDERS_RESULT", Get, ProfitSharing, "%s/v3/profitsharing/orders/{out_order_no}";
    /// Request a profit sharing return.
    ProfitsharingReturnOrders = "PROFITSHARING_RETURN_ORDERS", Post, ProfitSharing, "%s/v3/profitsharing/return-orders";
    /// Query a profit sharing return result.
    ProfitsharingReturnOrdersResult = "PROFITSHARING_RETURN_ORDERS_RESULT", Get, ProfitSharing, "%s/v3/profitsharing/return-orders/{out_return_no}";
    /// Unfreeze the remaining funds.
    ProfitsharingOrdersUnfreeze = "PROFITSHARING_ORDERS_UNFREEZE", Post, ProfitSharing, "%s/v3/profitsharing/orders/unfreeze";
    /// Query the amount left to share.
    ProfitsharingAmounts = "PROFITSHARING_AMOUNTS", Get, ProfitSharing, "%s/v3/profitsharing/transactions/{transaction_id}/amounts";
    /// Query the maximum sharing ratio of a sub-merchant.
    ProfitsharingMchConfig = "PROFITSHARING_MCH_CONFIG", Get, ProfitSharing, "%s/v3/profitsharing/merchant-configs/{sub_mchid}";
    /// Add a profit sharing receiver.
    ProfitsharingReceiversAdd = "PROFITSHARING_RECEIVERS_ADD", Post, ProfitSharing, "%s/v3/profitsharing/receivers/add";
    /// Delete a profit sharing receiver.
    ProfitsharingReceiversDelete = "PROFITSHARING_RECEIVERS_DELETE", Post, ProfitSharing, "%s/v3/profitsharing/receivers/delete";
    /// Apply for a profit sharing bill.
    ProfitsharingBills = "PROFITSHARING_BILLS", Get, ProfitSharing, "%s/v3/profitsharing/bills";

    // brand profit sharing
    /// Request brand profit sharing.
    BrandProfitsharingOrders = "BRAND_PROFITSHARING_ORDERS", Post, BrandProfitSharing, "%s/v3/brand/profitsharing/orders";
    /// Query a brand profit sharing result.
    BrandProfitsharingResult = "BRAND_PROFITSHARING_RESULT", Get, BrandProfitSharing, "%s/v3/brand/profitsharing/orders";
    /// Request a brand profit sharing return.
    BrandProfitsharingReturnOrders = "BRAND_PROFITSHARING_RETURN_ORDERS", Post, BrandProfitSharing, "%s/v3/brand/profitsharing/returnorders";
    /// Query a brand profit sharing return result.
    BrandProfitsharingReturnOrdersResult = "BRAND_PROFITSHARING_RETURN_ORDERS_RESULT", Get, BrandProfitSharing, "%s/v3/brand/profitsharing/returnorders";
    /// Finish brand profit sharing.
    BrandProfitsharingFinishOrder = "BRAND_PROFITSHARING_FINISH_ORDER", Post, BrandProfitSharing, "%s/v3/brand/profitsharing/finish-order";
    /// Query the order amount left to share.
    BrandProfitsharingOrderAmounts = "BRAND_PROFITSHARING_ORDER_AMOUNTS", Get, BrandProfitSharing, "%s/v3/brand/profitsharing/orders/{transaction_id}/amounts";
    /// Query the maximum brand sharing ratio.
    BrandConfigs = "BRAND_CONFIGS", Get, BrandProfitSharing, "%s/v3/brand/profitsharing/brand-configs/{brand_mchid}";
    /// Add a brand profit sharing receiver.
    BrandProfitsharingReceiversAdd = "BRAND_PROFITSHARING_RECEIVERS_ADD", Post, BrandProfitSharing, "%s/v3/brand/profitsharing/receivers/add";
    /// Delete a brand profit sharing receiver.
    BrandProfitsharingReceiversDelete = "BRAND_PROFITSHARING_RECEIVERS_DELETE", Post, BrandProfitSharing, "%s/v3/brand/profitsharing/receivers/delete";

    // sub-merchant onboarding
    /// Submit a sub-merchant application.
    SpecMchApplyPartner = "SPEC_MCH_APPLY_PARTNER", Post, SubMerchantApplyment, "%s/v3/applyment4sub/applyment/";
    /// Query an application by business code.
    SpecMchApplyQueryBusinessCode = "SPEC_MCH_APPLY_QUERY_BUSINESS_CODE", Get, SubMerchantApplyment, "%s/v3/applyment4sub/applyment/business_code/{business_code}";
    /// Query an application by applyment id.
    SpecMchApplyQueryApplymentId = "SPEC_MCH_APPLY_QUERY_APPLYMENT_ID", Get, SubMerchantApplyment, "%s/v3/applyment4sub/applyment/applyment_id/{applyment_id}";
    /// Modify the settlement account of a sub-merchant.
    SpecMchSubModify = "SPEC_MCH_SUB_MODIFY", Post, SubMerchantApplyment, "%s/v3/apply4sub/sub_merchants/{sub_mchid}/modify-settlement";
    /// Query the settlement account of a sub-merchant.
    SpecMchSubSettlement = "SPEC_MCH_SUB_SETTLEMENT", Get, SubMerchantApplyment, "%s/v3/apply4sub/sub_merchants/{sub_mchid}/settlement";

    // smart guides
    /// Register a shop guide.
    SmartGuides = "SMART_GUIDES", Post, SmartGuide, "%s/v3/smartguide/guides";
    /// Assign a shop guide.
    SmartGuidesAssign = "SMART_GUIDES_ASSIGN", Post, SmartGuide, "%s/v3/smartguide/guides/{guide_id}/assign";
    /// Query shop guides.
    SmartGuidesGet = "SMART_GUIDES_GET", Get, SmartGuide, "%s/v3/smartguide/guides";
    /// Modify a shop guide.
    SmartGuidesModify = "SMART_GUIDES_MODIFY", Patch, SmartGuide, "%s/v3/smartguide/guides/{guide_id}";

    // gold plan
    /// Change the gold plan status.
    GoldPlanChange = "GOLD_PLAN_CHANGE", Post, GoldPlan, "%s/v3/goldplan/merchants/changegoldplanstatus";
    /// Change the custom receipt page status.
    GoldPlanChangeCustom = "GOLD_PLAN_CHANGE_CUSTOM", Post, GoldPlan, "%s/v3/goldplan/merchants/changecustompagestatus";
    /// Set the advertising industry filter.
    GoldPlanFilter = "GOLD_PLAN_FILTER", Post, GoldPlan, "%s/v3/goldplan/merchants/set-advertising-industry-filter";
    /// Open advertising display.
    GoldPlanAdvOpen = "GOLD_PLAN_ADV_OPEN", Post, GoldPlan, "%s/v3/goldplan/merchants/open-advertising-show";
    /// Close advertising display.
    GoldPlanAdvClose = "GOLD_PLAN_ADV_CLOSE", Post, GoldPlan, "%s/v3/goldplan/merchants/close-advertising-show";

    // ecommerce onboarding
    /// Submit a secondary merchant application.
    EcommerceApplyment = "ECOMMERCE_APPLYMENT", Post, EcommerceApplyment, "%s/v3/ecommerce/applyments/";
    /// Query an application by applyment id.
    EcommerceApplymentId = "ECOMMERCE_APPLYMENT_ID", Get, EcommerceApplyment, "%s/v3/ecommerce/applyments/{applyment_id}";
    /// Query an application by business request number.
    EcommerceApplymentOutRequestNo = "ECOMMERCE_APPLYMENT_OUT_REQUEST_NO", Get, EcommerceApplyment, "%s/v3/ecommerce/applyments/out-request-no/{out_request_no}";

    // ecommerce funds, profit sharing and refunds
    /// Request profit sharing.
    EcommerceProfitsharingOrders = "ECOMMERCE_PROFITSHARING_ORDERS", Post, Ecommerce, "%s/v3/ecommerce/profitsharing/orders";
    /// Query a profit sharing result.
    EcommerceProfitsharingResult = "ECOMMERCE_PROFITSHARING_RESULT", Get, Ecommerce, "%s/v3/ecommerce/profitsharing/orders";
    /// Request a profit sharing return.
    EcommerceProfitsharingReturnOrders = "ECOMMERCE_PROFITSHARING_RETURN_ORDERS", Post, Ecommerce, "%s/v3/ecommerce/profitsharing/returnorders";
    /// Query a profit sharing return result.
    EcommerceProfitsharingReturnOrdersResult = "ECOMMERCE_PROFITSHARING_RETURN_ORDERS_RESULT", Get, Ecommerce, "%s/v3/ecommerce/profitsharing/returnorders";
    /// Finish profit sharing.
    EcommerceProfitsharingFinishOrder = "ECOMMERCE_PROFITSHARING_FINISH_ORDER", Post, Ecommerce, "%s/v3/ecommerce/profitsharing/finish-order";
    /// Query the order amount left to share.
    EcommerceProfitsharingOrderAmounts = "ECOMMERCE_PROFITSHARING_ORDER_AMOUNTS", Get, Ecommerce, "%s/v3/ecommerce/profitsharing/orders/{transaction_id}/amounts";
    /// Add a profit sharing receiver.
    EcommerceProfitsharingReceiversAdd = "ECOMMERCE_PROFITSHARING_RECEIVERS_ADD", Post, Ecommerce, "%s/v3/ecommerce/profitsharing/receivers/add";
    /// Delete a profit sharing receiver.
    EcommerceProfitsharingReceiversDelete = "ECOMMERCE_PROFITSHARING_RECEIVERS_DELETE", Post, Ecommerce, "%s/v3/ecommerce/profitsharing/receivers/delete";
    /// Request a subsidy.
    EcommerceSubsidiesCreate = "ECOMMERCE_SUBSIDIES_CREATE", Post, Ecommerce, "%s/v3/ecommerce/subsidies/create";
    /// Return a subsidy.
    EcommerceSubsidiesReturn = "ECOMMERCE_SUBSIDIES_RETURN", Post, Ecommerce, "%s/v3/ecommerce/subsidies/return";
    /// Cancel a subsidy.
    EcommerceSubsidiesCancel = "ECOMMERCE_SUBSIDIES_CANCEL", Post, Ecommerce, "%s/v3/ecommerce/subsidies/cancel";
    /// Apply for a refund.
    EcommerceRefundsApply = "ECOMMERCE_REFUNDS_APPLY", Post, Ecommerce, "%s/v3/ecommerce/refunds/apply";
    /// Query a refund by WeChat refund id.
    EcommerceRefundsId = "ECOMMERCE_REFUNDS_ID", Get, Ecommerce, "%s/v3/ecommerce/refunds/id/{refund_id}";
    /// Query a refund by merchant refund number.
    EcommerceRefundsOutRefundNo = "ECOMMERCE_REFUNDS_OUT_REFUND_NO", Get, Ecommerce, "%s/v3/ecommerce/refunds/out-refund-no/{out_refund_no}";
    /// Return an advance-paid refund.
    EcommerceRefundsReturnAdvance = "ECOMMERCE_REFUNDS_RETURN_ADVANCE", Post, Ecommerce, "%s/v3/ecommerce/refunds/{refund_id}/return-advance";
    /// Query an advance refund return result.
    EcommerceRefundsReturnAdvanceResult = "ECOMMERCE_REFUNDS_RETURN_ADVANCE_RESULT", Get, Ecommerce, "%s/v3/ecommerce/refunds/{refund_id}/return-advance";
    /// Query the real-time balance of a secondary merchant.
    EcommerceFundBalanceRealTime = "ECOMMERCE_FUND_BALANCE_REAL_TIME", Get, Ecommerce, "%s/v3/ecommerce/fund/balance/{sub_mchid}";
    /// Query the end-of-day balance of a secondary merchant.
    EcommerceFundBalanceEndDay = "ECOMMERCE_FUND_BALANCE_END_DAY", Get, Ecommerce, "%s/v3/ecommerce/fund/enddaybalance/{sub_mchid}";
    /// Query the real-time balance of the platform account.
    EcommerceFundBalanceTypeRealTime = "ECOMMERCE_FUND_BALANCE_TYPE_REAL_TIME", Get, Ecommerce, "%s/v3/merchant/fund/balance/{account_type}";
    /// Query the end-of-day balance of the platform account.
    EcommerceFundBalanceTypeEndDay = "ECOMMERCE_FUND_BALANCE_TYPE_END_DAY", Get, Ecommerce, "%s/v3/merchant/fund/dayendbalance/{account_type}";
    /// Schedule a secondary merchant withdrawal.
    EcommerceFundWithdraw = "ECOMMERCE_FUND_WITHDRAW", Post, Ecommerce, "%s/v3/ecommerce/fund/withdraw";
    /// Query a secondary merchant withdrawal by WeChat withdrawal id.
    EcommerceFundWithdrawId = "ECOMMERCE_FUND_WITHDRAW_ID", Get, Ecommerce, "%s/v3/ecommerce/fund/withdraw/{withdraw_id}";
    /// Query a secondary merchant withdrawal by merchant request number.
    EcommerceFundWithdrawOutRequestNo = "ECOMMERCE_FUND_WITHDRAW_OUT_REQUEST_NO", Get, Ecommerce, "%s/v3/ecommerce/fund/withdraw/out-request-no/{out_request_no}";
    /// Schedule a platform withdrawal.
    EcommerceFundMerchantWithdraw = "ECOMMERCE_FUND_MERCHANT_WITHDRAW", Post, Ecommerce, "%s/v3/merchant/fund/withdraw";
    /// Query a platform withdrawal by WeChat withdrawal id.
    EcommerceFundMerchantWithdrawId = "ECOMMERCE_FUND_MERCHANT_WITHDRAW_ID", Get, Ecommerce, "%s/v3/merchant/fund/withdraw/withdraw-id/{withdraw_id}";
    /// Query a platform withdrawal by merchant request number.
    EcommerceFundWithdrawMerchantOutRequestNo = "ECOMMERCE_FUND_WITHDRAW_MERCHANT_OUT_REQUEST_NO", Get, Ecommerce, "%s/v3/merchant/fund/withdraw/out-request-no/{out_request_no}";
    /// Download the daily withdrawal exception file.
    EcommerceFundWithdrawErrorBill = "ECOMMERCE_FUND_WITHDRAW_ERROR_BILL", Get, Ecommerce, "%s/v3/merchant/fund/withdraw/bill-type/{bill_type}";
    /// Apply for a secondary merchant fund flow bill.
    EcommerceFundFlowBill = "ECOMMERCE_FUND_FLOW_BILL", Get, Ecommerce, "%s/v3/ecommerce/bill/fundflowbill";
    /// Query the amount still available for cross-border payment.
    EcommerceFundOverseaBalance = "ECOMMERCE_FUND_OVERSEA_BALANCE", Get, Ecommerce, "%s/v3/funds-to-oversea/transactions/{transaction_id}/available_abroad_amounts";
    /// Apply for a cross-border fund transfer.
    EcommerceFundOverseaOrders = "ECOMMERCE_FUND_OVERSEA_ORDERS", Post, Ecommerce, "%s/v3/funds-to-oversea/orders";
    /// Query a cross-border transfer result.
    EcommerceFundOverseaOrdersResult = "ECOMMERCE_FUND_OVERSEA_ORDERS_RESULT", Get, Ecommerce, "%s/v3/funds-to-oversea/orders/{out_order_id}";
    /// Get the download URL of the currency exchange bill.
    EcommerceFundOverseaBills = "ECOMMERCE_FUND_OVERSEA_BILLS", Get, Ecommerce, "%s/v3/funds-to-oversea/bill-download-url";

    // mall score
    /// Synchronize mall points.
    MallScoreSync = "MALL_SCORE_SYNC", Post, MallScore, "%s/v3/businesscircle/points/notify";
    /// Query the mall points authorization of a user.
    MallScoreResult = "MALL_SCORE_RESULT", Get, MallScore, "%s/v3/businesscircle/user-authorizations/{openid}";

    // capital, bank lookup
    /// Look up the issuing bank of a personal card number.
    CapitalSearch = "CAPITAL_SEARCH", Get, Capital, "%s/v3/capital/capitallhh/banks/search-banks-by-bank-account";
    /// List banks supporting personal business.
    CapitalPersonal = "CAPITAL_PERSONAL", Get, Capital, "%s/v3/capital/capitallhh/banks/personal-banking";
    /// List banks supporting corporate business.
    CapitalCorporate = "CAPITAL_CORPORATE", Get, Capital, "%s/v3/capital/capitallhh/banks/corporate-banking";
    /// List provinces.
    CapitalProvinces = "CAPITAL_PROVINCES", Get, Capital, "%s/v3/capital/capitallhh/areas/provinces";
    /// List the cities of a province.
    CapitalCities = "CAPITAL_CITIES", Get, Capital, "%s/v3/capital/capitallhh/areas/provinces/{province_code}/cities";
    /// List the branches of a bank.
    CapitalBranches = "CAPITAL_BRANCHES", Get, Capital, "%s/v3/capital/capitallhh/banks/{bank_alias_code}/branches";
}

impl Endpoint {
    /// Names of the path-parameter placeholders, in template order.
    pub fn path_params(&self) -> Vec<&'static str> {
        placeholders(self.template()).collect()
    }

    pub fn summary(&self) -> EndpointSummary {
        EndpointSummary {
            name: self.name(),
            group: self.group(),
            verb: self.verb(),
            template: self.template(),
            path_params: self.path_params(),
        }
    }

    /// All endpoints belonging to `group`, in catalog order.
    pub fn in_group(group: EndpointGroup) -> impl Iterator<Item = Endpoint> {
        Endpoint::ALL
            .iter()
            .copied()
            .filter(move |endpoint| endpoint.group() == group)
    }
}

/// Flattened view of a catalog entry, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointSummary {
    pub name: &'static str,
    pub group: EndpointGroup,
    pub verb: HttpVerb,
    pub template: &'static str,
    pub path_params: Vec<&'static str>,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s)
    }
}

impl Serialize for Endpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        lookup(&name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_close_descriptor() {
        let close = lookup("CLOSE").unwrap();
        assert_eq!(close, Endpoint::Close);
        assert_eq!(close.verb(), HttpVerb::Post);
        assert_eq!(
            close.template(),
            "%s/v3/pay/transactions/out-trade-no/{out_trade_no}/close"
        );
        assert_eq!(close.group(), EndpointGroup::DirectTrade);
        assert_eq!(close.path_params(), vec!["out_trade_no"]);
    }

    #[test]
    fn test_cert_descriptor() {
        assert_eq!(Endpoint::Cert.verb(), HttpVerb::Get);
        assert_eq!(Endpoint::Cert.template(), "%s/v3/certificates");
        assert!(Endpoint::Cert.path_params().is_empty());
    }

    #[test]
    fn test_lookup_unknown_name() {
        assert_eq!(
            lookup("PAY_EVERYTHING"),
            Err(CatalogError::NotFound("PAY_EVERYTHING".to_string()))
        );
        // Names are case-sensitive.
        assert!(lookup("close").is_err());
    }

    #[test]
    fn test_catalog_size_and_order() {
        assert_eq!(Endpoint::ALL.len(), 179);
        assert_eq!(Endpoint::ALL[0], Endpoint::Cert);
        assert_eq!(Endpoint::ALL[Endpoint::ALL.len() - 1], Endpoint::CapitalBranches);
    }

    #[test]
    fn test_every_name_looks_up_to_itself() {
        let mut seen = HashSet::new();
        for endpoint in Endpoint::ALL {
            assert!(seen.insert(endpoint.name()), "duplicate name {}", endpoint);
            assert_eq!(lookup(endpoint.name()).unwrap(), *endpoint);
        }
    }

    #[test]
    fn test_templates_start_with_single_domain_placeholder() {
        for endpoint in Endpoint::ALL {
            let template = endpoint.template();
            assert!(template.starts_with(DOMAIN_PLACEHOLDER), "{}", endpoint);
            assert_eq!(template.matches(DOMAIN_PLACEHOLDER).count(), 1, "{}", endpoint);
        }
    }

    #[test]
    fn test_path_params_are_unique_snake_case() {
        for endpoint in Endpoint::ALL {
            let params = endpoint.path_params();
            let unique: HashSet<_> = params.iter().collect();
            assert_eq!(unique.len(), params.len(), "{}", endpoint);
            for param in params {
                assert!(!param.is_empty());
                assert!(
                    param.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                    "{} has non snake_case param {}",
                    endpoint,
                    param
                );
            }
        }
    }

    #[test]
    fn test_known_template_quirks_are_preserved() {
        assert_eq!(
            Endpoint::PayScoreDirectComplete.template(),
            "%s/payscore/serviceorder/direct-complete"
        );
        assert_eq!(
            Endpoint::PayScoreUserServiceState.path_params(),
            vec!["service_id", "appid", "openid"]
        );
        assert_eq!(
            Endpoint::EcommerceFundBalanceTypeRealTime.template(),
            Endpoint::BatchTransferFundBalance.template()
        );
    }

    #[test]
    fn test_patch_endpoints() {
        let patch: Vec<_> = Endpoint::ALL
            .iter()
            .filter(|e| e.verb() == HttpVerb::Patch)
            .map(|e| e.name())
            .collect();
        assert_eq!(
            patch,
            vec!["MARKETING_BUSI_FAVOR_BUDGET", "MARKETING_BUSI_FAVOR_UPDATE", "SMART_GUIDES_MODIFY"]
        );
    }

    #[test]
    fn test_every_group_is_populated() {
        for group in EndpointGroup::ALL {
            assert!(Endpoint::in_group(group).next().is_some(), "{} is empty", group);
        }
        assert_eq!(Endpoint::in_group(EndpointGroup::MallScore).count(), 2);
    }

    #[test]
    fn test_endpoint_serde_uses_name() {
        let json = serde_json::to_string(&Endpoint::MarketingBusiFavorBudget).unwrap();
        assert_eq!(json, "\"MARKETING_BUSI_FAVOR_BUDGET\"");
        let back: Endpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Endpoint::MarketingBusiFavorBudget);
        assert!(serde_json::from_str::<Endpoint>("\"NOPE\"").is_err());
    }
}
