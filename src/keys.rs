//! Keybinding definitions for Swapwise
//!
//! All keybindings are defined here for easy modification and future config file support.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::View;
use crate::ui::views::InputMode;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys (available in all views)
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Switch between browse and requests
pub const TAB: KeyCode = KeyCode::Tab;

/// Alternative quit
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Move left (vim style, pages and tabs)
pub const MOVE_LEFT: KeyCode = KeyCode::Char('h');

/// Move left (arrow key)
pub const MOVE_LEFT_ARROW: KeyCode = KeyCode::Left;

/// Move right (vim style, pages and tabs)
pub const MOVE_RIGHT: KeyCode = KeyCode::Char('l');

/// Move right (arrow key)
pub const MOVE_RIGHT_ARROW: KeyCode = KeyCode::Right;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

/// Check if key is move left (h or ←)
pub fn is_move_left(code: KeyCode) -> bool {
    matches!(code, MOVE_LEFT | MOVE_LEFT_ARROW)
}

/// Check if key is move right (l or →)
pub fn is_move_right(code: KeyCode) -> bool {
    matches!(code, MOVE_RIGHT | MOVE_RIGHT_ARROW)
}

// =============================================================================
// Input keys (used in input modes)
// =============================================================================

/// Submit input (Enter in input mode)
pub const SUBMIT: KeyCode = KeyCode::Enter;

// =============================================================================
// Browse View keys
// =============================================================================

/// Open the selected profile
pub const OPEN_PROFILE: KeyCode = KeyCode::Enter;

/// Send a swap request to the selected professional
pub const SEND_SWAP: KeyCode = KeyCode::Char('s');

/// Open own profile
pub const MY_PROFILE: KeyCode = KeyCode::Char('m');

/// Open the skill catalog
pub const CATALOG: KeyCode = KeyCode::Char('c');

/// Open the platform report (admin accounts only, uppercase)
pub const ADMIN_REPORT: KeyCode = KeyCode::Char('R');

/// Open text search input (filters the listing)
pub const SEARCH_INPUT: KeyCode = KeyCode::Char('/');

/// Open the availability filter picker
pub const FILTER: KeyCode = KeyCode::Char('f');

/// Clear search and availability filter
pub const CLEAR_FILTERS: KeyCode = KeyCode::Char('x');

/// Sign out (uppercase; lowercase 'l' moves right)
pub const LOGOUT: KeyCode = KeyCode::Char('L');

// =============================================================================
// Profile View keys
// =============================================================================

/// Enter edit mode on own profile
pub const EDIT_PROFILE: KeyCode = KeyCode::Char('e');

/// Save profile edits (uppercase; 's' sends a swap request)
pub const SAVE_PROFILE: KeyCode = KeyCode::Char('S');

/// Remove the selected skill chip (edit mode)
pub const REMOVE_SKILL: KeyCode = KeyCode::Char('x');

/// Leave feedback on another member's profile
pub const RATE: KeyCode = KeyCode::Char('r');

// =============================================================================
// Requests View keys
// =============================================================================

/// Accept the selected pending request
pub const ACCEPT: KeyCode = KeyCode::Char('a');

/// Reject the selected pending request
pub const REJECT: KeyCode = KeyCode::Char('x');

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Back",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Browse ↔ Requests",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back to previous",
    },
    KeyBindEntry {
        key: "Ctrl+l",
        description: "Refresh",
    },
    KeyBindEntry {
        key: "L",
        description: "Sign out",
    },
];

/// Navigation key bindings for help display
pub const NAV_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Move down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
];

/// Login view key bindings for help display
pub const LOGIN_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Tab",
        description: "Switch field",
    },
    KeyBindEntry {
        key: "Enter",
        description: "Sign in",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Quit",
    },
];

/// Browse view key bindings for help display
pub const BROWSE_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Select professional",
    },
    KeyBindEntry {
        key: "h/l",
        description: "Previous/next page",
    },
    KeyBindEntry {
        key: "Enter",
        description: "Open profile",
    },
    KeyBindEntry {
        key: "s",
        description: "Send swap request",
    },
    KeyBindEntry {
        key: "/",
        description: "Search skills, names, locations",
    },
    KeyBindEntry {
        key: "f",
        description: "Filter by availability",
    },
    KeyBindEntry {
        key: "x",
        description: "Clear search and filter",
    },
    KeyBindEntry {
        key: "m",
        description: "My profile",
    },
    KeyBindEntry {
        key: "c",
        description: "Skill catalog",
    },
    KeyBindEntry {
        key: "R",
        description: "Platform report (admin)",
    },
];

/// Profile view key bindings for help display
pub const PROFILE_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "e",
        description: "Edit profile (own profile)",
    },
    KeyBindEntry {
        key: "s",
        description: "Send swap request (other profiles)",
    },
    KeyBindEntry {
        key: "r",
        description: "Leave feedback (other profiles)",
    },
    KeyBindEntry {
        key: "j/k",
        description: "Scroll feedback",
    },
];

/// Profile edit mode key bindings for help display
pub const PROFILE_EDIT_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Select field",
    },
    KeyBindEntry {
        key: "h/l",
        description: "Select skill chip",
    },
    KeyBindEntry {
        key: "Enter",
        description: "Edit field / add skill",
    },
    KeyBindEntry {
        key: "x",
        description: "Remove selected skill",
    },
    KeyBindEntry {
        key: "S",
        description: "Save changes",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Discard changes",
    },
];

/// Requests view key bindings for help display
pub const REQUEST_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "h/l",
        description: "Incoming ↔ Outgoing",
    },
    KeyBindEntry {
        key: "j/k",
        description: "Select request",
    },
    KeyBindEntry {
        key: "a",
        description: "Accept (pending incoming)",
    },
    KeyBindEntry {
        key: "x",
        description: "Reject (pending incoming)",
    },
    KeyBindEntry {
        key: "Enter",
        description: "Open counterpart profile",
    },
];

/// Catalog view key bindings for help display
pub const CATALOG_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Select category",
    },
    KeyBindEntry {
        key: "/",
        description: "Search skills",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Clear search / back",
    },
    KeyBindEntry {
        key: "q",
        description: "Back",
    },
];

/// Input mode key bindings (search, dialogs)
pub const INPUT_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Enter",
        description: "Submit input",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Cancel input",
    },
    KeyBindEntry {
        key: "Backspace",
        description: "Delete character",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

// Individual KeyHint constants (used by builder functions)
pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_NAV: KeyHint = KeyHint {
    key: "j/k",
    label: "Navigate",
    color: Color::Blue,
};
pub const HINT_PAGE: KeyHint = KeyHint {
    key: "h/l",
    label: "Page",
    color: Color::Cyan,
};
pub const HINT_OPEN: KeyHint = KeyHint {
    key: "Enter",
    label: "Open",
    color: Color::Green,
};
pub const HINT_SWAP: KeyHint = KeyHint {
    key: "s",
    label: "Swap",
    color: Color::Green,
};
pub const HINT_SEARCH: KeyHint = KeyHint {
    key: "/",
    label: "Search",
    color: Color::Yellow,
};
pub const HINT_FILTER: KeyHint = KeyHint {
    key: "f",
    label: "Filter",
    color: Color::Magenta,
};
pub const HINT_CLEAR: KeyHint = KeyHint {
    key: "x",
    label: "Clear",
    color: Color::Yellow,
};
pub const HINT_MY_PROFILE: KeyHint = KeyHint {
    key: "m",
    label: "Profile",
    color: Color::Cyan,
};
pub const HINT_CATALOG: KeyHint = KeyHint {
    key: "c",
    label: "Catalog",
    color: Color::Magenta,
};
pub const HINT_REPORT: KeyHint = KeyHint {
    key: "R",
    label: "Report",
    color: Color::Blue,
};
pub const HINT_LOGOUT: KeyHint = KeyHint {
    key: "L",
    label: "Logout",
    color: Color::Red,
};
pub const HINT_EDIT: KeyHint = KeyHint {
    key: "e",
    label: "Edit",
    color: Color::Yellow,
};
pub const HINT_SAVE: KeyHint = KeyHint {
    key: "S",
    label: "Save",
    color: Color::Green,
};
pub const HINT_FIELD: KeyHint = KeyHint {
    key: "Enter",
    label: "Edit Field",
    color: Color::Green,
};
pub const HINT_CHIP: KeyHint = KeyHint {
    key: "h/l",
    label: "Chip",
    color: Color::Cyan,
};
pub const HINT_REMOVE: KeyHint = KeyHint {
    key: "x",
    label: "Remove",
    color: Color::Red,
};
pub const HINT_DISCARD: KeyHint = KeyHint {
    key: "Esc",
    label: "Discard",
    color: Color::Red,
};
pub const HINT_RATE: KeyHint = KeyHint {
    key: "r",
    label: "Rate",
    color: Color::Yellow,
};
pub const HINT_TABS: KeyHint = KeyHint {
    key: "h/l",
    label: "Tabs",
    color: Color::Cyan,
};
pub const HINT_ACCEPT: KeyHint = KeyHint {
    key: "a",
    label: "Accept",
    color: Color::Green,
};
pub const HINT_REJECT: KeyHint = KeyHint {
    key: "x",
    label: "Reject",
    color: Color::Red,
};
pub const HINT_REFRESH: KeyHint = KeyHint {
    key: "^L",
    label: "Refresh",
    color: Color::Blue,
};
pub const HINT_SWITCH: KeyHint = KeyHint {
    key: "Tab",
    label: "Switch",
    color: Color::Blue,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_BACK: KeyHint = KeyHint {
    key: "q",
    label: "Back",
    color: Color::Red,
};
pub const HINT_SUBMIT: KeyHint = KeyHint {
    key: "Enter",
    label: "Confirm",
    color: Color::Green,
};
pub const HINT_CANCEL_ESC: KeyHint = KeyHint {
    key: "Esc",
    label: "Cancel",
    color: Color::Red,
};
// Dialog hints
pub const HINT_YES: KeyHint = KeyHint {
    key: "y/Enter",
    label: "Yes",
    color: Color::Green,
};
pub const HINT_NO: KeyHint = KeyHint {
    key: "n/Esc",
    label: "No",
    color: Color::Red,
};
pub const HINT_SELECT: KeyHint = KeyHint {
    key: "Enter",
    label: "Select",
    color: Color::Green,
};
pub const HINT_DIALOG_CANCEL: KeyHint = KeyHint {
    key: "Esc",
    label: "Cancel",
    color: Color::Red,
};

// =============================================================================
// HintContext + DialogHintKind
// =============================================================================

/// Context for dynamic hint selection
#[derive(Default)]
pub struct HintContext {
    /// Signed-in account is an admin (Browse View shows the report hint)
    pub is_admin: bool,
    /// A search term or availability filter is active (Browse View)
    pub filters_active: bool,
    /// The open profile belongs to the signed-in member (Profile View)
    pub own_profile: bool,
    /// Profile edit mode is active (Profile View)
    pub editing: bool,
    /// A pending incoming request is selected (Requests View)
    pub pending_incoming_selected: bool,
    /// Active dialog kind (overrides view hints)
    pub dialog: Option<DialogHintKind>,
}

/// Dialog kind for hint selection
pub enum DialogHintKind {
    /// y/n confirmation
    Confirm,
    /// Pick one item from a list
    Select,
    /// Free text entry
    Input,
}

// =============================================================================
// Unified dispatch
// =============================================================================

/// Get the appropriate hints for the current context.
///
/// Priority: dialog > view × input_mode.
/// The Help view uses dedicated rendering and should not call this.
pub fn current_hints(view: View, input_mode: InputMode, ctx: &HintContext) -> Vec<KeyHint> {
    // Priority 1: dialog overrides everything
    if let Some(ref kind) = ctx.dialog {
        return dialog_hints(kind);
    }
    // Priority 2: view × input_mode
    match view {
        View::Login => LOGIN_VIEW_HINTS.to_vec(),
        View::Browse => browse_hints(input_mode, ctx),
        View::Profile => profile_hints(ctx),
        View::Requests => requests_hints(ctx),
        View::Catalog => catalog_hints(input_mode),
        View::Report => REPORT_VIEW_HINTS.to_vec(),
        // Help has no status bar. Return empty as a safety fallback.
        View::Help => vec![],
    }
}

fn dialog_hints(kind: &DialogHintKind) -> Vec<KeyHint> {
    match kind {
        DialogHintKind::Confirm => vec![HINT_YES, HINT_NO],
        DialogHintKind::Select => vec![HINT_NAV, HINT_SELECT, HINT_DIALOG_CANCEL],
        DialogHintKind::Input => vec![HINT_SUBMIT, HINT_CANCEL_ESC],
    }
}

fn browse_hints(input_mode: InputMode, ctx: &HintContext) -> Vec<KeyHint> {
    match input_mode {
        InputMode::Normal => browse_normal_hints(ctx),
        InputMode::SearchInput => vec![HINT_SUBMIT, HINT_CANCEL_ESC],
    }
}

fn browse_normal_hints(ctx: &HintContext) -> Vec<KeyHint> {
    let mut h = vec![
        HINT_HELP,
        HINT_NAV,
        HINT_PAGE,
        HINT_OPEN,
        HINT_SWAP,
        HINT_SEARCH,
        HINT_FILTER,
    ];
    if ctx.filters_active {
        h.push(HINT_CLEAR);
    }
    h.extend([HINT_MY_PROFILE, HINT_CATALOG]);
    if ctx.is_admin {
        h.push(HINT_REPORT);
    }
    h.extend([HINT_SWITCH, HINT_REFRESH, HINT_LOGOUT, HINT_QUIT]);
    h
}

fn profile_hints(ctx: &HintContext) -> Vec<KeyHint> {
    if ctx.editing {
        return vec![
            HINT_NAV,
            HINT_CHIP,
            HINT_FIELD,
            HINT_REMOVE,
            HINT_SAVE,
            HINT_DISCARD,
        ];
    }
    let mut h = vec![HINT_HELP];
    if ctx.own_profile {
        h.push(HINT_EDIT);
    } else {
        h.push(HINT_SWAP);
        h.push(HINT_RATE);
    }
    h.extend([HINT_NAV, HINT_BACK]);
    h
}

fn requests_hints(ctx: &HintContext) -> Vec<KeyHint> {
    let mut h = vec![HINT_HELP, HINT_TABS, HINT_NAV];
    if ctx.pending_incoming_selected {
        h.push(HINT_ACCEPT);
        h.push(HINT_REJECT);
    }
    h.extend([HINT_OPEN, HINT_SWITCH, HINT_REFRESH, HINT_QUIT]);
    h
}

fn catalog_hints(input_mode: InputMode) -> Vec<KeyHint> {
    match input_mode {
        InputMode::Normal => CATALOG_VIEW_HINTS.to_vec(),
        InputMode::SearchInput => vec![HINT_SUBMIT, HINT_CANCEL_ESC],
    }
}

/// Login view status bar hints
pub const LOGIN_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "Tab",
        label: "Field",
        color: Color::Blue,
    },
    KeyHint {
        key: "Enter",
        label: "Sign in",
        color: Color::Green,
    },
    KeyHint {
        key: "Esc",
        label: "Quit",
        color: Color::Red,
    },
];

/// Catalog view status bar hints
pub const CATALOG_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Category",
        color: Color::Cyan,
    },
    KeyHint {
        key: "/",
        label: "Search",
        color: Color::Yellow,
    },
    KeyHint {
        key: "^L",
        label: "Refresh",
        color: Color::Blue,
    },
    KeyHint {
        key: "q",
        label: "Back",
        color: Color::Red,
    },
];

/// Platform report status bar hints
pub const REPORT_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "^L",
        label: "Refresh",
        color: Color::Blue,
    },
    KeyHint {
        key: "q",
        label: "Back",
        color: Color::Red,
    },
];

// =============================================================================
// Tests
// =============================================================================
