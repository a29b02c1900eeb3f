//! Account settings: profile fields, sync frequency and notification switches.
//!
//! Values live in a shared `RwSignal<SettingsState>` so they survive panel
//! switches; saving only flashes a confirmation.

use leptos::prelude::*;

use crate::state::settings::{SettingsState, SyncFrequency, Toggle};

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let saved = move || settings.with(|s| s.saved);

    let on_save = move |_| {
        settings.update(SettingsState::save);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SettingsState::SAVED_FLASH_MS).await;
            settings.update(SettingsState::clear_saved);
        });
    };

    view! {
        <div class="settings">
            <div class="settings__header">
                <h1 class="settings__title">"Settings"</h1>
                <p class="settings__subtitle">"Manage your account and preferences"</p>
            </div>

            <section class="settings__section">
                <h2 class="settings__section-title">"Profile"</h2>
                <label class="settings__field">
                    <span class="settings__label">"Display Name"</span>
                    <input
                        class="settings__input"
                        type="text"
                        prop:value=move || settings.with(|s| s.company_name.clone())
                        on:input=move |ev| settings.update(|s| s.set_company_name(event_target_value(&ev)))
                    />
                </label>
                <label class="settings__field">
                    <span class="settings__label">"Email"</span>
                    <input
                        class="settings__input"
                        type="email"
                        prop:value=move || settings.with(|s| s.email.clone())
                        on:input=move |ev| settings.update(|s| s.set_email(event_target_value(&ev)))
                    />
                </label>
            </section>

            <section class="settings__section">
                <h2 class="settings__section-title">"Data Sync"</h2>
                <label class="settings__field">
                    <span class="settings__label">"Sync Frequency"</span>
                    <select
                        class="settings__input"
                        prop:value=move || settings.with(|s| s.sync_frequency.value())
                        on:change=move |ev| {
                            if let Some(freq) = SyncFrequency::from_value(&event_target_value(&ev)) {
                                settings.update(|s| s.set_sync_frequency(freq));
                            }
                        }
                    >
                        {SyncFrequency::ALL
                            .into_iter()
                            .map(|freq| view! { <option value=freq.value()>{freq.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <p class="settings__hint">"How often to automatically pull data from QuickBooks."</p>
            </section>

            <section class="settings__section">
                <h2 class="settings__section-title">"Notifications"</h2>
                {Toggle::NOTIFICATIONS.into_iter().map(|toggle| render_switch(settings, toggle)).collect_view()}
            </section>

            <section class="settings__section">
                <h2 class="settings__section-title">"Security"</h2>
                {render_switch(settings, Toggle::TwoFactor)}
            </section>

            <button class="settings__save" class:settings__save--saved=saved on:click=on_save>
                {move || if saved() { "Saved!" } else { "Save Changes" }}
            </button>
        </div>
    }
}

fn render_switch(settings: RwSignal<SettingsState>, toggle: Toggle) -> impl IntoView {
    let on = move || settings.with(|s| s.is_on(toggle));
    view! {
        <div class="settings__switch-row">
            <div>
                <p class="settings__switch-label">{toggle.label()}</p>
                <p class="settings__switch-hint">{toggle.description()}</p>
            </div>
            <button
                class="settings__switch"
                class:settings__switch--on=on
                role="switch"
                aria-checked=move || if on() { "true" } else { "false" }
                on:click=move |_| settings.update(|s| s.flip(toggle))
            >
                <span class="settings__switch-knob"></span>
            </button>
        </div>
    }
}
