//! Blocking user notifications (the desktop stand-in for `alert()`).

use eframe::egui::{Context, Id, Modal, RichText};

use crate::{
    config::PLOT_CONFIG,
    ui::{UI_TEXT, UiStyleExt},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Shows `notice` as a modal. Returns true once the user dismisses it.
pub(crate) fn render_notice(ctx: &Context, notice: &Notice) -> bool {
    let color = match notice.kind {
        NoticeKind::Info => PLOT_CONFIG.color_info,
        NoticeKind::Error => PLOT_CONFIG.color_loss,
    };
    let mut dismissed = false;
    let modal = Modal::new(Id::new("stablex_notice")).show(ctx, |ui| {
        ui.set_min_width(280.0);
        ui.heading(RichText::new(&notice.title).color(color));
        ui.add_space(6.0);
        ui.label(&notice.body);
        ui.add_space(10.0);
        if ui.button_secondary(&UI_TEXT.nt_ok).clicked() {
            dismissed = true;
        }
    });
    dismissed || modal.should_close()
}
