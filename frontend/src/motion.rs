use yew::prelude::*;

/// Direction an element slides in from while it fades in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Enter {
    Rise,
    RiseShort,
    FromLeft,
    FromRight,
}

impl Enter {
    fn class(self) -> &'static str {
        match self {
            Enter::Rise => "enter-rise",
            Enter::RiseShort => "enter-rise-short",
            Enter::FromLeft => "enter-left",
            Enter::FromRight => "enter-right",
        }
    }
}

pub fn reveal(visible: bool, enter: Enter) -> Classes {
    classes!("reveal", enter.class(), visible.then_some("is-visible"))
}

/// Staggers siblings. Hidden elements drop the delay so they leave together.
pub fn delay(visible: bool, millis: u32) -> String {
    format!("transition-delay: {}ms;", if visible { millis } else { 0 })
}

pub const STYLES: &str = r#"
    .reveal {
        opacity: 0;
        transition-property: opacity, transform;
        transition-duration: 700ms;
        transition-timing-function: cubic-bezier(0.4, 0, 0.2, 1);
    }
    .reveal.enter-rise { transform: translateY(2.5rem); }
    .reveal.enter-rise-short { transform: translateY(1.25rem); }
    .reveal.enter-left { transform: translateX(-2.5rem); }
    .reveal.enter-right { transform: translateX(2.5rem); }
    .reveal.is-visible {
        opacity: 1;
        transform: none;
    }
    @media (prefers-reduced-motion: reduce) {
        .reveal { transition: none; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_elements_carry_no_visible_class() {
        let classes = reveal(false, Enter::FromLeft).to_string();
        assert_eq!(classes, "reveal enter-left");
    }

    #[test]
    fn visible_elements_get_the_visible_class() {
        let classes = reveal(true, Enter::Rise).to_string();
        assert!(classes.split(' ').any(|c| c == "is-visible"));
    }

    #[test]
    fn delay_only_applies_while_visible() {
        assert_eq!(delay(true, 400), "transition-delay: 400ms;");
        assert_eq!(delay(false, 400), "transition-delay: 0ms;");
    }
}
