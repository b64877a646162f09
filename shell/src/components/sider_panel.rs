//! Side region showing the selected panel, if any.

use leptos::prelude::*;
use serde_json::Value;

use crate::state::sider::SiderProps;

/// Sider region. Always mounted; without a selected panel it renders an
/// empty aside.
#[component]
pub fn SiderPanel(#[prop(into)] props: Signal<SiderProps<Callback<()>>>) -> impl IntoView {
    let is_empty = move || props.with(|p| p.panel.is_none());
    let on_close = move |_: leptos::ev::MouseEvent| props.with_untracked(|p| p.on_close).run(());

    view! {
        <aside class="sider" class:sider--empty=is_empty>
            <Show when=move || !is_empty()>
                <div class="sider__header">
                    <span class="sider__title">{move || props.with(|p| p.panel.key().map(str::to_owned))}</span>
                    <button class="sider__close" on:click=on_close title="Close panel">
                        "\u{2715}"
                    </button>
                </div>
                <dl class="sider__props">
                    {move || {
                        props
                            .with(|p| p.panel.props())
                            .into_iter()
                            .map(|(key, value)| {
                                view! {
                                    <dt>{key}</dt>
                                    <dd>{display_value(&value)}</dd>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </dl>
            </Show>
        </aside>
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
