//! Frame dispatch: login vs. portal, confirmation execution, toasts.

use super::confirm::{ConfirmAction, ConfirmDialogState};
use super::context::AppContext;
use super::state::{AdminPage, AppState, StudentPage, TutorPage};
use super::toast::ToastManager;
use super::TutorHubApp;
use crate::models::user::{Role, User};
use crate::ui::login::{render_login, LoginState};
use crate::ui::views;

impl TutorHubApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("Starting TutorHub with seeded demo data");
        Self {
            context: AppContext::seeded(),
            current_user: None,
            login: LoginState::default(),
            state: AppState::default(),
            toasts: ToastManager::new(),
            confirm_dialog: ConfirmDialogState::default(),
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.current_user.clone() {
            None => {
                if let Some(username) = render_login(ctx, &mut self.login) {
                    let user = self.context.auth.login(&username);
                    self.toasts.success(format!("Welcome, {}", user.name));
                    self.current_user = Some(user);
                }
            }
            Some(user) => {
                self.render_header(ctx);
                self.render_sidebar(ctx);
                self.render_portal(ctx, &user);

                if let Some(action) = self.confirm_dialog.render(ctx) {
                    self.execute_confirmed(action);
                }
            }
        }

        self.toasts.render(ctx);
    }

    pub(super) fn sign_out(&mut self) {
        log::info!("Signed out");
        self.current_user = None;
        self.login = LoginState::default();
        // Screen state resets on logout; service data survives the session
        self.state = AppState::default();
    }

    fn render_portal(&mut self, ctx: &egui::Context, user: &User) {
        let updated = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match user.role {
                        Role::Student => self.render_student_page(ui, user),
                        Role::Tutor => self.render_tutor_page(ui, user),
                        Role::Admin => {
                            self.render_admin_page(ui);
                            None
                        }
                    })
                    .inner
            })
            .inner;
        if let Some(user) = updated {
            log::info!("Profile updated for user {}", user.id);
            self.current_user = Some(user);
        }
    }

    // The profile screens hand back an edited identity; every other
    // page returns None.
    fn render_student_page(&mut self, ui: &mut egui::Ui, user: &User) -> Option<User> {
        match self.state.student_page {
            StudentPage::Dashboard => views::student::dashboard::render(ui, &self.context, user),
            StudentPage::FindTutor => views::student::find_tutor::render(
                ui,
                &self.context.directory,
                &mut self.state.find_tutor,
                &mut self.toasts,
            ),
            StudentPage::Schedule => views::student::schedule::render(
                ui,
                &mut self.context.sessions,
                user,
                &mut self.state.student_schedule,
                &mut self.confirm_dialog,
                &mut self.toasts,
            ),
            StudentPage::Courses => {
                views::student::courses::render(ui, &mut self.context.catalog, &mut self.toasts)
            }
            StudentPage::Resources => views::student::resources::render(
                ui,
                &self.context.resources,
                &mut self.state.resource_subject_filter,
            ),
            StudentPage::Feedback => views::student::feedback::render(
                ui,
                &self.context.sessions,
                &mut self.context.feedback,
                user,
                &mut self.state.feedback_form,
                &mut self.toasts,
            ),
            StudentPage::Profile => {
                return views::student::profile::render(
                    ui,
                    user,
                    &self.context.catalog,
                    &mut self.state.profile_edit,
                    &mut self.toasts,
                );
            }
        }
        None
    }

    fn render_tutor_page(&mut self, ui: &mut egui::Ui, user: &User) -> Option<User> {
        match self.state.tutor_page {
            TutorPage::Dashboard => views::tutor::dashboard::render(ui, &self.context, user),
            TutorPage::Schedule => views::tutor::schedule::render(
                ui,
                &mut self.context.sessions,
                user,
                &mut self.state.tutor_schedule,
                &mut self.state.evaluation_form,
                &mut self.toasts,
            ),
            TutorPage::TutoringSetup => views::tutor::tutoring_setup::render(
                ui,
                &mut self.context.availability,
                &mut self.state.tutoring_setup,
                &mut self.toasts,
            ),
            TutorPage::Students => views::tutor::students::render(
                ui,
                &self.context.directory,
                &mut self.state.roster_detail,
            ),
            TutorPage::Resources => views::tutor::resources::render(
                ui,
                &mut self.context.resources,
                &self.context.availability,
                user,
                &mut self.state.share_resource,
                &mut self.toasts,
            ),
            TutorPage::Profile => {
                return views::tutor::profile::render(
                    ui,
                    user,
                    &self.context.availability,
                    &mut self.state.profile_edit,
                    &mut self.toasts,
                );
            }
        }
        None
    }

    fn render_admin_page(&mut self, ui: &mut egui::Ui) {
        match self.state.admin_page {
            AdminPage::Dashboard => views::admin::dashboard::render(ui, &self.context),
            AdminPage::Users => views::admin::users::render(
                ui,
                &mut self.context.directory,
                &mut self.state.user_filter,
                &mut self.toasts,
            ),
            AdminPage::Classes => views::admin::classes::render(
                ui,
                &mut self.context.catalog,
                &mut self.state.create_class,
                &mut self.confirm_dialog,
                &mut self.toasts,
            ),
            AdminPage::Catalog => views::admin::catalog::render(
                ui,
                &mut self.context.catalog,
                &mut self.state.catalog_form,
                &mut self.toasts,
            ),
            AdminPage::Evaluation => views::admin::evaluation::render(
                ui,
                &mut self.context.feedback,
                &mut self.state.review,
                &mut self.toasts,
            ),
            AdminPage::Reports => views::admin::reports::render(ui, &self.context),
        }
    }

    fn execute_confirmed(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::CancelSession { id, .. } => {
                match self.context.sessions.cancel(id) {
                    Ok(()) => self.toasts.info("Session cancelled"),
                    Err(err) => self.toasts.error(err.to_string()),
                }
            }
            ConfirmAction::DeleteClass { id, .. } => {
                match self.context.catalog.delete_class(id) {
                    Ok(()) => self.toasts.info("Class deleted"),
                    Err(err) => self.toasts.error(err.to_string()),
                }
            }
        }
    }
}
