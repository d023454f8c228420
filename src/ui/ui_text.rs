use std::sync::LazyLock;

pub struct UiText {
    pub brand: String,
    pub footer: String,

    // --- Header ---
    pub hdr_connect_wallet: String,
    pub hdr_disconnect: String,

    // --- Landing ---
    pub ld_hero_title: String,
    pub ld_hero_body: String,
    pub ld_get_started: String,
    pub ld_why_title: String,
    pub ld_features: &'static [(&'static str, &'static str)],
    pub ld_list_title: String,
    pub ld_list_body: String,
    pub ld_list_now: String,

    // --- List your coin ---
    pub lc_title: String,
    pub lc_intro: String,
    pub lc_submit: String,
    pub lc_submitted: String,
    pub lc_placeholders: &'static [&'static str],

    // --- Exchange ---
    pub ex_title: String,
    pub ex_chart: String,
    pub ex_order_book: String,
    pub ex_asks: String,
    pub ex_bids: String,
    pub ex_price: String,
    pub ex_size: String,
    pub ex_spread: String,
    pub ex_balances: String,
    pub ex_place_order: String,
    pub ex_quantity: String,
    pub ex_quantity_hint: String,
    pub ex_cost: String,
    pub ex_recent_fills: String,
    pub ex_no_fills: String,

    // --- Trading dashboard ---
    pub td_title: String,
    pub td_market_overview: String,
    pub td_current_price: String,
    pub td_wallet_info: String,
    pub td_balance_unavailable: String,
    pub td_order_type: String,
    pub td_amount: String,

    // --- Notices ---
    pub nt_trade_rejected: String,
    pub nt_listing_incomplete: String,
    pub nt_order_failed: String,
    pub nt_wallet_required: String,
    pub nt_ok: String,

    pub label_wallet: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    brand: "Stablex".to_string(),
    footer: "© 2024 Stablex. Powered by Solana.".to_string(),

    hdr_connect_wallet: "Connect Wallet".to_string(),
    hdr_disconnect: "Disconnect".to_string(),

    ld_hero_title: "A New Era of Stable, Decentralized Trading".to_string(),
    ld_hero_body: "Stablex is a decentralized exchange on Solana that combats volatility through \
        an innovative exponential pricing model. Large and frequent trades incur an offset from \
        the market price, fostering sustainable and balanced trading activities."
        .to_string(),
    ld_get_started: "Get Started".to_string(),
    ld_why_title: "Why Choose Stablex?".to_string(),
    ld_features: &[
        (
            "Sustainable Trading",
            "Our exponential pricing mechanism disincentivizes volatile, large trades, \
             stabilizing prices for all users.",
        ),
        (
            "Secure and Reliable",
            "Built on Solana's robust blockchain, your assets are always protected by \
             advanced cryptography.",
        ),
        (
            "Blazing Fast",
            "Leverage Solana's lightning-fast transaction speeds to trade quickly with \
             minimal fees.",
        ),
    ],
    ld_list_title: "List Your Token on Stablex".to_string(),
    ld_list_body: "Expand your project's reach by listing on Stablex. Unlock sustainable \
        liquidity and tap into a community that values balanced and fair trading."
        .to_string(),
    ld_list_now: "List Now".to_string(),

    lc_title: "List Your Token on Stablex".to_string(),
    lc_intro: "Provide details about your project to be listed on Stablex. Our team will \
        review your submission and get back to you as soon as possible."
        .to_string(),
    lc_submit: "Submit".to_string(),
    lc_submitted: "Your token listing request has been submitted!".to_string(),
    // Same order as ListingField
    lc_placeholders: &[
        "E.g., MyToken",
        "E.g., MTK",
        "E.g., https://mytoken.org",
        "Give us a brief overview of your project...",
        "E.g., 0x1234... or Solana address",
    ],

    ex_title: "Stablex Exchange".to_string(),
    ex_chart: "Price".to_string(),
    ex_order_book: "Order Book".to_string(),
    ex_asks: "Asks".to_string(),
    ex_bids: "Bids".to_string(),
    ex_price: "Price".to_string(),
    ex_size: "Size".to_string(),
    ex_spread: "Spread".to_string(),
    ex_balances: "Balances".to_string(),
    ex_place_order: "Place Order".to_string(),
    ex_quantity: "Quantity".to_string(),
    ex_quantity_hint: "Amount of tokens".to_string(),
    ex_cost: "Est. total".to_string(),
    ex_recent_fills: "Recent Trades".to_string(),
    ex_no_fills: "No trades yet".to_string(),

    td_title: "Trading Dashboard".to_string(),
    td_market_overview: "Market Overview".to_string(),
    td_current_price: "Current Price".to_string(),
    td_wallet_info: "Wallet Info".to_string(),
    td_balance_unavailable: "unavailable (no RPC connection)".to_string(),
    td_order_type: "Order Type".to_string(),
    td_amount: "Amount".to_string(),

    nt_trade_rejected: "Trade rejected".to_string(),
    nt_listing_incomplete: "Listing incomplete".to_string(),
    nt_order_failed: "Order not placed".to_string(),
    nt_wallet_required: "Connect your wallet to continue.".to_string(),
    nt_ok: "OK".to_string(),

    label_wallet: "Wallet".to_string(),
});
