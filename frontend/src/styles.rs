use log::debug;

use crate::dom::Page;
use crate::error::SiteResult;

/// Keyframes and utility rules the interaction layers depend on but the
/// static stylesheet doesn't ship.
pub const ANIMATION_CSS: &str = r#"
    @keyframes ripple {
        to {
            width: 100px;
            height: 100px;
            opacity: 0;
        }
    }

    @keyframes fadeInUp {
        from {
            opacity: 0;
            transform: translateY(30px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }

    .animate-on-scroll {
        opacity: 0;
        transform: translateY(30px);
        transition: all 0.6s cubic-bezier(0.4, 0, 0.2, 1);
    }

    .animate-on-scroll.animated {
        opacity: 1;
        transform: translateY(0);
    }

    .btn {
        transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
    }

    .floating-assistance {
        transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
    }

    button:focus,
    a:focus {
        transition: box-shadow 0.2s ease;
    }
"#;

pub fn inject(page: &Page) -> SiteResult<()> {
    let Some(head) = page.document.head() else {
        debug!("Document has no <head>, animation styles not injected");
        return Ok(());
    };

    let style = page.document.create_element("style")?;
    style.set_text_content(Some(ANIMATION_CSS));
    head.append_child(&style)?;
    Ok(())
}
