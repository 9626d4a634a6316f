use crate::text::ResourceId;

/// String resources used by the demo screen.
pub mod strings {
    use super::ResourceId;

    pub const HELLO: ResourceId = ResourceId::new("hello_from_snackflow");
    pub const OK: ResourceId = ResourceId::new("ok");
}

/// The kinds of snackbars the demo screen can request, one per button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Showcase {
    StringResource,
    StringLiteral,
    MixedStringTypes,
    WithAction,
    WithDismissAction,
    WithOnActionPerformCallback,
    WithOnDismissCallback,
    Indefinite,
}

impl Showcase {
    /// Every showcase in menu order.
    pub const ALL: [Showcase; 8] = [
        Showcase::StringResource,
        Showcase::StringLiteral,
        Showcase::MixedStringTypes,
        Showcase::WithAction,
        Showcase::WithDismissAction,
        Showcase::WithOnActionPerformCallback,
        Showcase::WithOnDismissCallback,
        Showcase::Indefinite,
    ];

    /// Button caption on the demo screen.
    pub fn label(&self) -> &'static str {
        match self {
            Showcase::StringResource => "Snackbar with string resource",
            Showcase::StringLiteral => "Snackbar with string literal",
            Showcase::MixedStringTypes => "Snackbar with mixed string types",
            Showcase::WithAction => "Show snackbar with action",
            Showcase::WithDismissAction => "Show snackbar with dismiss action",
            Showcase::WithOnActionPerformCallback => "Show snackbar with onActionPerform callback",
            Showcase::WithOnDismissCallback => "Show snackbar with onDismiss callback",
            Showcase::Indefinite => "Indefinite snackbar",
        }
    }

    /// Looks up a showcase by its 1-based menu position.
    pub fn from_menu_index(index: usize) -> Option<Showcase> {
        index
            .checked_sub(1)
            .and_then(|index| Showcase::ALL.get(index))
            .copied()
    }
}
