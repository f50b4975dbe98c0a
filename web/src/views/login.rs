//! Auth screen: login/signup toggle plus the signup OTP verification step.

use api::{Role, SignupRequest};
use dioxus::prelude::*;

use ui::{use_session, Button, ButtonVariant, Input, Label};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut is_login = use_signal(|| true);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Student);
    let mut otp = use_signal(String::new);
    let mut show_otp_input = use_signal(|| false);
    let mut message = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);
    let mut session = use_session();
    let nav = use_navigator();

    // Already signed in: skip straight to the dashboard.
    use_effect(move || {
        if session.read().is_logged_in() {
            nav.replace(Route::Home {});
        }
    });

    let send_otp = move || async move {
        let client = ui::make_client();
        match client.send_otp(&email()).await {
            Ok(_) => {
                message.set(Some("OTP sent! Please check your email.".to_string()));
                show_otp_input.set(true);
            }
            Err(err) => message.set(Some(err.to_string())),
        }
        busy.set(false);
    };

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if busy() {
            return;
        }
        busy.set(true);
        message.set(None);

        spawn(async move {
            let client = ui::make_client();
            if is_login() {
                match client.login(&email(), &password()).await {
                    Ok(resp) => {
                        session.write().login(resp.user_id);
                        nav.push(Route::Home {});
                    }
                    Err(err) => message.set(Some(err.to_string())),
                }
                busy.set(false);
            } else {
                let req = SignupRequest {
                    college_email: email(),
                    password: password(),
                    role: role(),
                };
                match client.signup(&req).await {
                    Ok(_) => {
                        message.set(Some(
                            "Signup successful! Please verify your email.".to_string(),
                        ));
                        send_otp().await;
                    }
                    Err(err) => {
                        message.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            }
        });
    };

    let handle_verify = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            let client = ui::make_client();
            match client.verify_otp(&email(), &otp()).await {
                Ok(resp) => {
                    session.write().login(resp.user_id);
                    match role() {
                        Role::Student => nav.push(Route::StudentDetails {}),
                        Role::Faculty => nav.push(Route::FacultyDetails {}),
                    };
                }
                Err(err) => message.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    let handle_resend = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(send_otp());
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { class: "auth-title", "Project Information System" }

            div {
                class: "auth-card",
                h2 {
                    if is_login() { "Welcome Back!" } else { "Create Account" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    div {
                        class: "form-field",
                        Label { html_for: "email", "College Email" }
                        Input {
                            id: "email",
                            r#type: "email",
                            placeholder: "your.email@college.edu",
                            value: email(),
                            required: true,
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "password", "Password" }
                        Input {
                            id: "password",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: password(),
                            required: true,
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    if !is_login() {
                        div {
                            class: "form-field",
                            Label { html_for: "role", "Role" }
                            select {
                                id: "role",
                                class: "input",
                                onchange: move |evt| {
                                    role.set(if evt.value() == "Faculty" {
                                        Role::Faculty
                                    } else {
                                        Role::Student
                                    });
                                },
                                option { value: "Student", "Student" }
                                option { value: "Faculty", "Faculty" }
                            }
                        }
                    }

                    if show_otp_input() {
                        div {
                            class: "form-field",
                            Label { html_for: "otp", "Enter OTP" }
                            Input {
                                id: "otp",
                                placeholder: "Enter OTP",
                                value: otp(),
                                required: true,
                                oninput: move |evt: FormEvent| otp.set(evt.value()),
                            }
                            Button {
                                onclick: handle_verify,
                                disabled: busy(),
                                if busy() { "Verifying..." } else { "Verify OTP" }
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: handle_resend,
                                "Resend OTP"
                            }
                        }
                    } else {
                        Button {
                            r#type: "submit",
                            disabled: busy(),
                            if busy() {
                                "Processing..."
                            } else if is_login() {
                                "Login"
                            } else {
                                "Sign Up"
                            }
                        }
                    }
                }

                if let Some(msg) = message() {
                    p { class: "auth-message", "{msg}" }
                }

                p {
                    class: "auth-toggle",
                    if is_login() { "Don't have an account? " } else { "Already have an account? " }
                    button {
                        r#type: "button",
                        class: "link-button",
                        onclick: move |_| {
                            is_login.set(!is_login());
                            show_otp_input.set(false);
                            message.set(None);
                        },
                        if is_login() { "Sign Up" } else { "Login" }
                    }
                }
            }
        }
    }
}
