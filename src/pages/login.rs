//! Login page with username, password, and account role.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginRequest;
use crate::routing::paths;
use crate::state::session::Role;

fn validate_login_input(username: &str, password: &str, role: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err("Enter both username and password.");
    }
    let role = Role::parse(Some(role));
    let Some(role) = role.as_str() else {
        return Err("Choose an account type.");
    };
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned(), role: role.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Customer.as_str().unwrap_or_default().to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&username.get(), &password.get(), &role.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match crate::net::api::login(&request).await {
                    Ok(user) => crate::util::auth::sign_in(&user, navigate),
                    Err(e) => Err(e),
                };
                match result {
                    Ok(()) => info.set(String::new()),
                    Err(e) => info.set(format!("Sign-in failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Takeout"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {Role::LOGIN_CHOICES
                            .into_iter()
                            .map(|choice| {
                                let value = choice.as_str().unwrap_or_default();
                                view! { <option value=value>{choice.label()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <a href=paths::CUSTOMER_REGISTER class="login-link">"Create a customer account"</a>
                <a href=paths::RESTAURANT_APPLY class="login-link">"Apply to list your restaurant"</a>
            </div>
        </div>
    }
}
