use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};

use crate::config::SiteConfig;
use crate::dom::{contains_target, listen, set_styles, Page};
use crate::error::SiteResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    ToggleClicked,
    NavLinkClicked,
    EscapePressed,
    OutsideClicked,
}

impl MenuState {
    /// The toggle flips the menu; everything else can only close it.
    pub fn next(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuState::Closed, MenuEvent::ToggleClicked) => MenuState::Open,
            (MenuState::Closed, _) => MenuState::Closed,
            (MenuState::Open, _) => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn body_overflow(self) -> &'static str {
        match self {
            MenuState::Open => "hidden",
            MenuState::Closed => "",
        }
    }

    /// Inline style for each of the three hamburger segments, top to bottom.
    pub fn line_styles(self) -> [(&'static str, &'static str); 3] {
        match self {
            MenuState::Open => [
                ("transform", "rotate(45deg) translate(5px, 5px)"),
                ("opacity", "0"),
                ("transform", "rotate(-45deg) translate(7px, -6px)"),
            ],
            MenuState::Closed => [("transform", ""), ("opacity", ""), ("transform", "")],
        }
    }
}

struct MenuController {
    state: Cell<MenuState>,
    toggle: HtmlElement,
    panel: HtmlElement,
    lines: Vec<HtmlElement>,
    body: HtmlElement,
}

impl MenuController {
    fn dispatch(&self, event: MenuEvent) {
        let current = self.state.get();
        let next = current.next(event);
        if next != current {
            self.state.set(next);
            self.apply(next);
        }
    }

    fn apply(&self, state: MenuState) {
        for element in [&self.panel, &self.toggle] {
            let classes = element.class_list();
            let _ = if state.is_open() {
                classes.add_1("active")
            } else {
                classes.remove_1("active")
            };
        }
        let _ = self.body.style().set_property("overflow", state.body_overflow());

        for (line, style) in self.lines.iter().zip(state.line_styles()) {
            set_styles(line, &[style]);
        }
    }
}

pub fn init(page: &Page, config: &SiteConfig) -> SiteResult<()> {
    let toggle = page.query::<HtmlElement>(config.menu_toggle)?;
    let panel = page.query::<HtmlElement>(config.menu_panel)?;
    let (Some(toggle), Some(panel)) = (toggle, panel) else {
        debug!("Mobile menu markup not found, skipping");
        return Ok(());
    };

    let controller = Rc::new(MenuController {
        state: Cell::new(MenuState::Closed),
        toggle: toggle.clone(),
        panel,
        lines: page.query_all(config.hamburger_lines)?,
        body: page.body()?,
    });

    {
        let controller = controller.clone();
        listen(&toggle, "click", move |_: MouseEvent| {
            controller.dispatch(MenuEvent::ToggleClicked);
        })?;
    }

    for link in page.query_all::<HtmlElement>(config.menu_nav_links)? {
        let controller = controller.clone();
        listen(&link, "click", move |_: MouseEvent| {
            controller.dispatch(MenuEvent::NavLinkClicked);
        })?;
    }

    {
        let controller = controller.clone();
        listen(&page.document, "keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                controller.dispatch(MenuEvent::EscapePressed);
            }
        })?;
    }

    listen(&page.document, "click", move |e: MouseEvent| {
        if !controller.state.get().is_open() {
            return;
        }
        let inside_panel = contains_target(&controller.panel, e.target());
        let inside_toggle = contains_target(&controller.toggle, e.target());
        if !inside_panel && !inside_toggle {
            controller.dispatch(MenuEvent::OutsideClicked);
        }
    })?;

    debug!("Mobile menu attached");
    Ok(())
}
