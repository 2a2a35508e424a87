//! Application shell: owns the service context, the signed-in user and
//! all transient screen state, and dispatches each frame to the portal
//! matching the user's role.

pub mod confirm;
pub mod context;
mod header;
mod lifecycle;
mod sidebar;
pub mod state;
pub mod toast;

use self::confirm::ConfirmDialogState;
use self::context::AppContext;
use self::state::AppState;
use self::toast::ToastManager;
use crate::models::user::User;
use crate::ui::login::LoginState;

pub struct TutorHubApp {
    /// Seeded in-memory services, shared by every portal
    context: AppContext,
    /// None while the login screen is showing
    current_user: Option<User>,
    login: LoginState,
    /// Aggregated per-screen widget state
    state: AppState,
    toasts: ToastManager,
    confirm_dialog: ConfirmDialogState,
}

impl eframe::App for TutorHubApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
