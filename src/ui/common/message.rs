//! Form-level notice banner shown above the contact form

use leptos::prelude::*;

/// Visual category of a form notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    fn container_class(self) -> &'static str {
        match self {
            NoticeKind::Info => {
                "form-notice bg-blue-50 text-blue-800 border-blue-200 dark:bg-blue-900/30 dark:text-blue-200 dark:border-blue-800"
            }
            NoticeKind::Success => {
                "form-notice bg-green-50 text-green-800 border-green-200 dark:bg-green-900/30 dark:text-green-200 dark:border-green-800"
            }
            NoticeKind::Error => {
                "form-notice bg-red-50 text-red-800 border-red-200 dark:bg-red-900/30 dark:text-red-200 dark:border-red-800"
            }
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            NoticeKind::Info => "ℹ",
            NoticeKind::Success => "✓",
            NoticeKind::Error => "⚠",
        }
    }
}

/// Banner component. Renders nothing while the signal is `None`.
#[component]
pub fn FormNotice(
    /// Current notice, if any
    #[prop(into)]
    notice: Signal<Option<(NoticeKind, String)>>,
) -> impl IntoView {
    view! {
        {move || {
            notice.get().map(|(kind, text)| view! {
                <div class=kind.container_class() role="status">
                    <span aria-hidden="true" class="mr-1.5">{kind.glyph()}</span>
                    <span>{text}</span>
                </div>
            })
        }}
    }
}
