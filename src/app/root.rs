use {
    eframe::{
        Frame,
        egui::{Context, Visuals},
    },
    std::{mem, time::Duration},
};

use crate::{
    Cli,
    app::{
        AppState, ExchangeForm, LandingState, ListingForm, PhaseView, TradeForm,
        state::resolve_route,
    },
    config::{DEMO, DF, Route},
    domain::{ListingRequest, WalletSession},
    engine::{OrderTicket, SessionState, TradeIntent, place_order},
    ui::{
        HeaderAction, LandingAction, Notice, UI_CONFIG, UI_TEXT, render_exchange, render_footer,
        render_header, render_landing, render_list_coin, render_notice, render_trade,
    },
    utils::now_timestamp_ms,
};

pub struct App {
    pub(crate) wallet: WalletSession,
    pub(crate) session: SessionState,
    pub(crate) notice: Option<Notice>,
    demo_nonce: u64,
    state: AppState,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        Self::from_cli(args, now_timestamp_ms())
    }

    /// Builds the app without a GUI context.
    pub fn from_cli(args: Cli, now_ms: i64) -> Self {
        let mut app = Self {
            wallet: WalletSession::default(),
            session: SessionState::new(&DEMO.market, now_ms),
            notice: None,
            demo_nonce: now_ms.unsigned_abs(),
            state: AppState::default(),
        };

        if let Some(address) = args.wallet {
            match app.wallet.connect(address) {
                Ok(()) => {
                    if DF.log_wallet {
                        log::info!("Wallet connected from CLI: {:?}", app.wallet.address());
                    }
                }
                Err(e) => log::warn!("Ignoring --wallet: {}", e),
            }
        }

        app.state = app.navigate(args.view.unwrap_or_default());
        app
    }

    pub fn route(&self) -> Route {
        self.state.route()
    }

    pub fn wallet(&self) -> &WalletSession {
        &self.wallet
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// State for `route`, or the landing page if the route is gated and no wallet is present.
    pub(crate) fn navigate(&mut self, route: Route) -> AppState {
        let resolved = resolve_route(route, &self.wallet);
        if resolved != route {
            self.notice = Some(Notice::info(&UI_TEXT.brand, &UI_TEXT.nt_wallet_required));
        }
        if DF.log_navigation {
            log::info!("Navigate {:?} -> {:?}", route, resolved);
        }
        AppState::enter(resolved)
    }

    pub(crate) fn connect_wallet(&mut self) {
        self.demo_nonce = self.demo_nonce.wrapping_add(1);
        let address = self.wallet.connect_demo(self.demo_nonce);
        if DF.log_wallet {
            log::info!("Demo wallet connected: {}", address);
        }
    }

    /// Drops the wallet and starts a fresh session for whoever connects next.
    pub(crate) fn disconnect_wallet(&mut self) {
        let previous = self.wallet.disconnect();
        self.session = SessionState::new(&DEMO.market, now_timestamp_ms());
        if DF.log_wallet {
            log::info!("Wallet disconnected: {:?}", previous);
        }
    }

    /// Returns true if the trade filled.
    pub(crate) fn submit_trade(&mut self, form: &mut ExchangeForm, now_ms: i64) -> bool {
        let result = TradeIntent::parse(form.direction, &form.quantity_input)
            .and_then(|intent| self.session.execute(intent, now_ms));
        match result {
            Ok(_) => {
                form.quantity_input.clear();
                true
            }
            Err(e) => {
                self.notice = Some(Notice::error(&UI_TEXT.nt_trade_rejected, e.to_string()));
                false
            }
        }
    }

    /// Returns true if the request was accepted (and the form cleared).
    pub(crate) fn submit_listing(&mut self, request: &mut ListingRequest) -> bool {
        if let Err(e) = request.validate() {
            self.notice = Some(Notice::error(&UI_TEXT.nt_listing_incomplete, e.to_string()));
            return false;
        }
        if DF.log_listing {
            match serde_json::to_string(request) {
                Ok(json) => log::info!("Listing request: {}", json),
                Err(e) => log::error!("Failed to serialize listing request: {}", e),
            }
        }
        *request = ListingRequest::default();
        self.notice = Some(Notice::info(&UI_TEXT.brand, &UI_TEXT.lc_submitted));
        true
    }

    pub(crate) fn submit_order(&mut self, form: &TradeForm) {
        let ticket = OrderTicket {
            side: form.side,
            price: form.price_input.trim().parse().unwrap_or(f64::NAN),
            amount: form.amount_input.trim().parse().unwrap_or(f64::NAN),
        };
        match place_order(self.wallet.address(), &ticket) {
            Ok(signature) => log::info!("Order placed: {}", signature),
            Err(e) => {
                self.notice = Some(Notice::error(&UI_TEXT.nt_order_failed, e.to_string()));
            }
        }
    }

    pub(crate) fn tick_landing_state(&mut self, ctx: &Context) -> Option<AppState> {
        match render_landing(ctx)? {
            LandingAction::GetStarted => {
                if !self.wallet.is_connected() {
                    self.connect_wallet();
                }
                Some(self.navigate(Route::Exchange))
            }
            LandingAction::ListNow => Some(self.navigate(Route::ListCoin)),
        }
    }

    pub(crate) fn tick_list_coin_state(&mut self, ctx: &Context, form: &mut ListingForm) {
        if render_list_coin(ctx, &mut form.request) {
            self.submit_listing(&mut form.request);
        }
    }

    pub(crate) fn tick_exchange_state(&mut self, ctx: &Context, form: &mut ExchangeForm) {
        let now = now_timestamp_ms();
        self.session.roll_to(now);
        if render_exchange(ctx, &self.session, form) {
            self.submit_trade(form, now);
        }
        // Wake up for the next bucket even if nobody trades
        let interval = self.session.bar_interval_ms();
        let until_next_bar = interval - now.rem_euclid(interval);
        ctx.request_repaint_after(Duration::from_millis(until_next_bar as u64));
    }

    pub(crate) fn tick_trade_state(&mut self, ctx: &Context, form: &mut TradeForm) {
        if render_trade(ctx, self.wallet.address(), form) {
            self.submit_order(form);
        }
    }

    fn draw_frame(&mut self, ctx: &Context) {
        // Panels before the central page
        let header_action = render_header(ctx, self.state.route(), &self.wallet);
        render_footer(ctx);

        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Landing(mut s) => s.tick(self, ctx),
            AppState::ListCoin(mut s) => s.tick(self, ctx),
            AppState::Exchange(mut s) => s.tick(self, ctx),
            AppState::Trade(mut s) => s.tick(self, ctx),
        };

        if let Some(action) = header_action {
            self.apply_header_action(action);
        }
        self.enforce_route_guard();

        if let Some(notice) = &self.notice {
            if render_notice(ctx, notice) {
                self.notice = None;
            }
        }
    }

    fn apply_header_action(&mut self, action: HeaderAction) {
        match action {
            HeaderAction::Navigate(route) => self.state = self.navigate(route),
            HeaderAction::Connect => self.connect_wallet(),
            HeaderAction::Disconnect => self.disconnect_wallet(),
        }
    }

    /// Re-checked every frame so a disconnect on a gated page lands on the landing page.
    fn enforce_route_guard(&mut self) {
        let route = self.state.route();
        if resolve_route(route, &self.wallet) != route {
            if DF.log_navigation {
                log::info!("{:?} requires a wallet, redirecting", route);
            }
            self.state = AppState::Landing(LandingState);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        crate::trace_time!("frame", {
            setup_custom_visuals(ctx);
            self.draw_frame(ctx);
        });
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TradeDirection;
    use crate::domain::ListingField;
    use strum::IntoEnumIterator;

    const T0: i64 = 1_700_000_000_000;
    const ADDR: &str = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";

    fn app(wallet: Option<&str>, view: Option<Route>) -> App {
        App::from_cli(
            Cli {
                wallet: wallet.map(str::to_string),
                view,
            },
            T0,
        )
    }

    mod startup {
        use super::*;

        #[test]
        fn defaults_to_landing_without_wallet() {
            let a = app(None, None);
            assert_eq!(a.route(), Route::Landing);
            assert!(!a.wallet().is_connected());
            assert!(a.notice().is_none());
        }

        #[test]
        fn gated_view_without_wallet_redirects_with_notice() {
            let a = app(None, Some(Route::Exchange));
            assert_eq!(a.route(), Route::Landing);
            assert!(a.notice().is_some());
        }

        #[test]
        fn cli_wallet_opens_gated_view() {
            let a = app(Some(ADDR), Some(Route::Trade));
            assert_eq!(a.route(), Route::Trade);
            assert_eq!(a.wallet().address(), Some(ADDR));
        }

        #[test]
        fn blank_cli_wallet_is_ignored() {
            let a = app(Some("   "), Some(Route::Exchange));
            assert!(!a.wallet().is_connected());
            assert_eq!(a.route(), Route::Landing);
        }
    }

    mod wallet {
        use super::*;

        #[test]
        fn each_demo_connect_gets_a_new_address() {
            let mut a = app(None, None);
            a.connect_wallet();
            let first = a.wallet().address().map(str::to_string);
            a.wallet.disconnect();
            a.connect_wallet();
            assert!(first.is_some());
            assert_ne!(a.wallet().address().map(str::to_string), first);
        }

        #[test]
        fn disconnect_on_gated_view_resets_session_and_redirects() {
            let mut a = app(Some(ADDR), Some(Route::Exchange));
            let mut form = ExchangeForm {
                direction: TradeDirection::Buy,
                quantity_input: "100".into(),
            };
            assert!(a.submit_trade(&mut form, T0));
            assert_eq!(a.session().fills().count(), 1);

            a.apply_header_action(HeaderAction::Disconnect);
            a.enforce_route_guard();

            assert_eq!(a.route(), Route::Landing);
            assert_eq!(a.session().fills().count(), 0);
            assert_eq!(a.session().price(), DEMO.market.initial_price);
        }

        #[test]
        fn every_route_reachable_once_connected() {
            let mut a = app(None, None);
            a.apply_header_action(HeaderAction::Connect);
            for route in Route::iter() {
                a.apply_header_action(HeaderAction::Navigate(route));
                a.enforce_route_guard();
                assert_eq!(a.route(), route);
            }
        }
    }

    mod forms {
        use super::*;

        #[test]
        fn bad_quantity_raises_notice_and_keeps_input() {
            let mut a = app(Some(ADDR), Some(Route::Exchange));
            let mut form = ExchangeForm {
                direction: TradeDirection::Buy,
                quantity_input: "lots".into(),
            };
            assert!(!a.submit_trade(&mut form, T0));
            assert_eq!(form.quantity_input, "lots");
            assert!(a.notice().is_some());
            assert_eq!(a.session().fills().count(), 0);
        }

        #[test]
        fn filled_trade_clears_input() {
            let mut a = app(Some(ADDR), Some(Route::Exchange));
            let mut form = ExchangeForm {
                direction: TradeDirection::Buy,
                quantity_input: "10".into(),
            };
            assert!(a.submit_trade(&mut form, T0));
            assert!(form.quantity_input.is_empty());
            assert!(a.notice().is_none());
            assert_eq!(a.session().balances().base, 10.0);
        }

        #[test]
        fn incomplete_listing_is_kept_for_editing() {
            let mut a = app(None, Some(Route::ListCoin));
            let mut req = ListingRequest::default();
            *req.field_mut(ListingField::Name) = "MyToken".into();
            assert!(!a.submit_listing(&mut req));
            assert_eq!(req.name, "MyToken");
            assert!(a.notice().is_some_and(|n| n.body.contains("Token Symbol")));
        }

        #[test]
        fn complete_listing_clears_form() {
            let mut a = app(None, Some(Route::ListCoin));
            let mut req = ListingRequest::default();
            for field in ListingField::iter() {
                *req.field_mut(field) = "x".into();
            }
            assert!(a.submit_listing(&mut req));
            assert_eq!(req, ListingRequest::default());
        }

        #[test]
        fn order_placement_reports_unimplemented() {
            let mut a = app(Some(ADDR), Some(Route::Trade));
            let form = TradeForm {
                side: TradeDirection::Sell,
                price_input: "100".into(),
                amount_input: "2".into(),
            };
            a.submit_order(&form);
            let notice = a.notice().cloned().unwrap();
            assert!(notice.body.contains("not implemented"));
        }

        #[test]
        fn unparseable_order_price_is_invalid() {
            let mut a = app(Some(ADDR), Some(Route::Trade));
            let form = TradeForm {
                side: TradeDirection::Buy,
                price_input: "".into(),
                amount_input: "2".into(),
            };
            a.submit_order(&form);
            assert!(a.notice().unwrap().body.contains("price"));
        }
    }
}
