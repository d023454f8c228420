mod chrome;
mod exchange;
mod landing;
mod list_coin;
mod trade;

pub(crate) use chrome::{HeaderAction, render_footer, render_header};
pub(crate) use exchange::render_exchange;
pub(crate) use landing::{LandingAction, render_landing};
pub(crate) use list_coin::render_list_coin;
pub(crate) use trade::render_trade;
