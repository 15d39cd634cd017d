//! Admin login page.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::net::api::ApiClient;
use crate::state::login::{LoginState, PASSWORD_MAX_CHARS, USERNAME_MAX_CHARS};

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let config = expect_context::<SiteConfig>();
    let state = RwSignal::new(LoginState::default());
    let login_failed = config.messages.login_failed;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        state.update(|s| request = s.begin_submit(&login_failed));
        let Some(request) = request else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let login_failed = login_failed.clone();
            leptos::task::spawn_local(async move {
                match api.login(&request).await {
                    Ok(resp) if resp.success && !resp.session_id.is_empty() => {
                        api.session().sign_in(&resp.session_id);
                        crate::util::dom::navigate_to(crate::routes::DASHBOARD_PATH);
                    }
                    Ok(_) => state.update(|s| s.fail(login_failed)),
                    Err(e) => {
                        log::warn!("login rejected: {e}");
                        state.update(|s| s.fail(login_failed));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, &login_failed, request);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"관리자 로그인"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        name="username"
                        autocomplete="username"
                        placeholder="아이디"
                        maxlength=USERNAME_MAX_CHARS.to_string()
                        prop:value=move || state.with(|s| s.username.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.username = value);
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        autocomplete="current-password"
                        placeholder="비밀번호"
                        maxlength=PASSWORD_MAX_CHARS.to_string()
                        prop:value=move || state.with(|s| s.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.password = value);
                        }
                    />
                    <button class="login-button" type="submit" disabled=move || state.with(|s| s.busy)>
                        {move || state.with(LoginState::button_label)}
                    </button>
                </form>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <p class="login-message login-message--error">
                        {move || state.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
            </div>
        </div>
    }
}
