pub(super) mod phase_view;
pub(super) mod landing;
pub(super) mod list_coin;
pub(super) mod exchange;
pub(super) mod trade;

pub(crate) use phase_view::PhaseView;
