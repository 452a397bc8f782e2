//! Centralized Fluent UI System Icon abstraction for the desktop shell.
//!
//! This module provides semantic icon identifiers and a single SVG renderer so
//! shell components do not embed raw icon strings or ad-hoc SVG snippets. The
//! catalog uses a subset of Fluent UI System Icons (`@fluentui/svg-icons`,
//! regular 24px) mapped to portfolio-desktop semantics.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Education app icon.
    GraduationCap,
    /// Experience app icon.
    Briefcase,
    /// About-me app icon.
    Person,
    /// Project browser app icon.
    FolderOpen,
    /// Project detail window icon.
    DocumentText,
    /// Project browser search field icon.
    Search,
    /// External project link icon.
    Link,
    /// Lock screen glyph.
    LockClosed,
    /// Window minimize control icon.
    WindowMinimize,
    /// Window maximize control icon.
    WindowMaximize,
    /// Window restore control icon.
    WindowRestore,
    /// Dismiss/close icon.
    Dismiss,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::GraduationCap => "graduation-cap",
            Self::Briefcase => "briefcase",
            Self::Person => "person",
            Self::FolderOpen => "folder-open",
            Self::DocumentText => "document-text",
            Self::Search => "search",
            Self::Link => "link",
            Self::LockClosed => "lock-closed",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    /// Raw SVG body markup for the icon.
    ///
    /// The paths are copied from `@fluentui/svg-icons` regular 24px SVG assets.
    fn svg_body(self) -> &'static str {
        match self {
            Self::GraduationCap => {
                r#"<path d="M12.3 4.07a.75.75 0 0 0-.6 0L3.2 7.8a.75.75 0 0 0 0 1.38l3.05 1.35v4.23c0 .45.24.87.64 1.1A10.36 10.36 0 0 0 12 17.25c1.83 0 3.56-.49 5.11-1.4.4-.22.64-.64.64-1.1v-4.22l1.75-.78v4.5a.75.75 0 0 0 1.5 0V8.49a.75.75 0 0 0-.45-.69L12.3 4.07Zm3.95 7.03v3.55A8.86 8.86 0 0 1 12 15.75a8.86 8.86 0 0 1-4.25-1.1V11.1l3.95 1.74c.19.09.41.09.6 0l3.95-1.74ZM12 5.58l6.39 2.87L12 11.27 5.61 8.45 12 5.58Z"/>"#
            }
            Self::Briefcase => {
                r#"<path d="M9.25 2.5h5.5c.97 0 1.75.78 1.75 1.75V6h2.25C20.55 6 22 7.46 22 9.25v8.5c0 1.8-1.46 3.25-3.25 3.25H5.25A3.25 3.25 0 0 1 2 17.75v-8.5C2 7.45 3.46 6 5.25 6H7.5V4.25c0-.97.78-1.75 1.75-1.75ZM9 6h6V4.25a.25.25 0 0 0-.25-.25h-5.5a.25.25 0 0 0-.25.25V6ZM5.25 7.5c-.97 0-1.75.78-1.75 1.75v8.5c0 .97.78 1.75 1.75 1.75h13.5c.97 0 1.75-.78 1.75-1.75v-8.5c0-.97-.78-1.75-1.75-1.75H5.25Zm6 3.5h1.5a.75.75 0 0 1 .1 1.5h-1.6a.75.75 0 0 1-.1-1.5h.1Z"/>"#
            }
            Self::Person => {
                r#"<path d="M17.75 14C18.99 14 20 15.01 20 16.25v.57c0 .9-.32 1.77-.9 2.45C17.53 21.1 15.15 22 12 22c-3.15 0-5.53-.9-7.1-2.73a3.75 3.75 0 0 1-.9-2.45v-.57C4 15.01 5.01 14 6.25 14h11.5Zm0 1.5H6.25a.75.75 0 0 0-.75.75v.57c0 .54.2 1.06.54 1.47C7.3 19.76 9.26 20.5 12 20.5c2.74 0 4.7-.74 5.96-2.21.35-.41.54-.93.54-1.47v-.57a.75.75 0 0 0-.75-.75ZM12 2a5 5 0 1 1 0 10 5 5 0 0 1 0-10Zm0 1.5a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7Z"/>"#
            }
            Self::FolderOpen => {
                r#"<path d="M3.5 6.25c0-.97.78-1.75 1.75-1.75h2.88c.2 0 .39.08.53.22l2.06 2.06c.14.14.33.22.53.22h5.5c.97 0 1.75.78 1.75 1.75 0 .09.01.17.04.25H8.72c-1.34 0-2.58.71-3.25 1.87L3.5 14.28V6.25ZM2 17.79A3.25 3.25 0 0 0 5.25 21h11.04c1.33 0 2.57-.72 3.24-1.88l3.03-5.25A3.25 3.25 0 0 0 19.96 9a.75.75 0 0 0 .04-.25c0-1.8-1.45-3.25-3.25-3.25h-5.19L9.72 3.66c-.42-.42-1-.66-1.6-.66H5.26A3.25 3.25 0 0 0 2 6.25V17.79Zm6.72-7.3h11.03a1.75 1.75 0 0 1 1.51 2.63l-3.03 5.25c-.4.7-1.14 1.13-1.95 1.13H5.25a1.75 1.75 0 0 1-1.51-2.63l3.03-5.25c.4-.7 1.14-1.12 1.95-1.12Z"/>"#
            }
            Self::DocumentText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::Search => {
                r#"<path d="M10 2.75a7.25 7.25 0 0 1 5.63 11.82l4.9 4.9a.75.75 0 0 1-.98 1.13l-.08-.07-4.9-4.9A7.25 7.25 0 1 1 10 2.75Zm0 1.5a5.75 5.75 0 1 0 0 11.5 5.75 5.75 0 0 0 0-11.5Z"/>"#
            }
            Self::Link => {
                r#"<path d="M9.25 7a.75.75 0 0 1 .11 1.49l-.11.01H7a3.5 3.5 0 0 0-.2 7l.2.01h2.25a.75.75 0 0 1 .1 1.49l-.1.01H7a5 5 0 0 1-.25-10H9.25ZM17 7a5 5 0 0 1 .25 10H14.75a.75.75 0 0 1-.1-1.49l.1-.01H17a3.5 3.5 0 0 0 .2-7L17 8.5h-2.25a.75.75 0 0 1-.1-1.49l.1-.01H17ZM7 11.25h10a.75.75 0 0 1 .1 1.49l-.1.01H7a.75.75 0 0 1-.1-1.49l.1-.01Z"/>"#
            }
            Self::LockClosed => {
                r#"<path d="M12 2a4 4 0 0 1 4 4v2h1.75C18.99 8 20 9.01 20 10.25v9.5C20 20.99 18.99 22 17.75 22H6.25C5.01 22 4 20.99 4 19.75v-9.5C4 9.01 5.01 8 6.25 8H8V6a4 4 0 0 1 4-4Zm5.75 7.5H6.25a.75.75 0 0 0-.75.75v9.5c0 .41.34.75.75.75h11.5c.41 0 .75-.34.75-.75v-9.5a.75.75 0 0 0-.75-.75ZM12 13a1.5 1.5 0 0 1 .75 2.8v1.45a.75.75 0 0 1-1.5 0V15.8A1.5 1.5 0 0 1 12 13Zm0-9.5A2.5 2.5 0 0 0 9.5 6v2h5V6A2.5 2.5 0 0 0 12 3.5Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 14px compact icon (window controls).
    Xs,
    /// 16px standard icon (dock entries, search field).
    #[default]
    Sm,
    /// 20px medium icon (titlebar app glyph).
    Md,
    /// 24px large icon (desktop launchers).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders a Fluent UI System Icon SVG from the centralized shell icon catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
