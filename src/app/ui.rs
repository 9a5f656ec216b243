//! Navigation element bindings
//!
//! A page may carry any subset of the navigation elements, so each handle is
//! optional and a missing one is skipped.

use crate::interface::NavElement;
use std::cell::{Cell, RefCell};

use super::auth::AuthStatus;

pub const LOGIN_LINK_ID: &str = "loginLink";
pub const SIGNUP_LINK_ID: &str = "signupLink";
pub const USER_MENU_ID: &str = "userMenu";
pub const MENTOR_MENU_ID: &str = "mentorMenu";
pub const LOGOUT_MENU_ID: &str = "logoutMenu";
pub const USER_PROFILE_ID: &str = "userProfile";

#[derive(Debug)]
pub struct NavBindings<E> {
    pub login_link: Option<E>,
    pub signup_link: Option<E>,
    pub user_menu: Option<E>,
    pub mentor_menu: Option<E>,
    pub logout_menu: Option<E>,
    pub user_profile: Option<E>,
}

impl<E> Default for NavBindings<E> {
    fn default() -> Self {
        Self {
            login_link: None,
            signup_link: None,
            user_menu: None,
            mentor_menu: None,
            logout_menu: None,
            user_profile: None,
        }
    }
}

fn show<E: NavElement>(element: &Option<E>, visible: bool) {
    if let Some(element) = element {
        element.set_visible(visible);
    }
}

impl<E: NavElement> NavBindings<E> {
    /// Apply the visibility rules for `status`
    pub fn render(&self, status: &AuthStatus) {
        match status {
            AuthStatus::Authenticated { username, mentor } => {
                show(&self.login_link, false);
                show(&self.signup_link, false);
                show(&self.user_menu, true);
                show(&self.logout_menu, true);
                show(&self.mentor_menu, *mentor);
                if let Some(profile) = &self.user_profile {
                    profile.set_text(username);
                }
            }
            AuthStatus::Anonymous => {
                show(&self.login_link, true);
                show(&self.signup_link, true);
                show(&self.user_menu, false);
                show(&self.mentor_menu, false);
                show(&self.logout_menu, false);
            }
        }
    }
}

/// Element state held in memory. Used where there is no DOM.
#[derive(Debug, Default)]
pub struct MemoryElement {
    visible: Cell<Option<bool>>,
    text: RefCell<Option<String>>,
}

impl MemoryElement {
    /// `None` until something set it
    pub fn visible(&self) -> Option<bool> {
        self.visible.get()
    }

    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }
}

impl NavElement for MemoryElement {
    fn set_visible(&self, visible: bool) {
        self.visible.set(Some(visible));
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = Some(text.to_string());
    }
}

impl NavBindings<MemoryElement> {
    /// Every element present
    pub fn in_memory() -> Self {
        Self {
            login_link: Some(MemoryElement::default()),
            signup_link: Some(MemoryElement::default()),
            user_menu: Some(MemoryElement::default()),
            mentor_menu: Some(MemoryElement::default()),
            logout_menu: Some(MemoryElement::default()),
            user_profile: Some(MemoryElement::default()),
        }
    }

    /// Ids of the elements currently shown
    pub fn visible_ids(&self) -> Vec<&'static str> {
        [
            (LOGIN_LINK_ID, &self.login_link),
            (SIGNUP_LINK_ID, &self.signup_link),
            (USER_MENU_ID, &self.user_menu),
            (MENTOR_MENU_ID, &self.mentor_menu),
            (LOGOUT_MENU_ID, &self.logout_menu),
        ]
        .into_iter()
        .filter(|(_, element)| {
            element
                .as_ref()
                .and_then(MemoryElement::visible)
                .unwrap_or(false)
        })
        .map(|(id, _)| id)
        .collect()
    }
}

#[cfg(feature = "wasm")]
mod dom {
    use super::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement};

    impl NavElement for HtmlElement {
        fn set_visible(&self, visible: bool) {
            let display = if visible { "block" } else { "none" };
            if let Err(e) = self.style().set_property("display", display) {
                log::debug!("could not set display on {}: {e:?}", self.id());
            }
        }

        fn set_text(&self, text: &str) {
            self.set_text_content(Some(text));
        }
    }

    impl NavBindings<HtmlElement> {
        pub fn from_document(document: &Document) -> Self {
            let lookup = |id: &str| {
                document
                    .get_element_by_id(id)
                    .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            };

            Self {
                login_link: lookup(LOGIN_LINK_ID),
                signup_link: lookup(SIGNUP_LINK_ID),
                user_menu: lookup(USER_MENU_ID),
                mentor_menu: lookup(MENTOR_MENU_ID),
                logout_menu: lookup(LOGOUT_MENU_ID),
                user_profile: lookup(USER_PROFILE_ID),
            }
        }

        /// Bindings for the page currently loaded; empty without a document
        pub fn from_current_page() -> Self {
            web_sys::window()
                .and_then(|window| window.document())
                .map(|document| Self::from_document(&document))
                .unwrap_or_default()
        }
    }
}
