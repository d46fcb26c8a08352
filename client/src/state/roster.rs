//! Static team roster shown on the logged-out home page.
//!
//! DESIGN
//! ======
//! Each entry carries an explicit `Role` next to its display text. The
//! display text is rendered verbatim, so the lead's `(GROUP HEAD)` marker
//! stays visible; the role drives styling.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

/// Substring that identifies the group lead in display text.
pub const LEAD_MARKER: &str = "GROUP HEAD";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Lead,
    Member,
}

impl Role {
    /// Derive a role from display text using the lead marker.
    pub fn from_display(display: &str) -> Self {
        if display.contains(LEAD_MARKER) { Self::Lead } else { Self::Member }
    }

    /// Glyph rendered before the member's name.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Lead => "⭐ ",
            Self::Member => "✓ ",
        }
    }

    pub fn card_class(self) -> &'static str {
        match self {
            Self::Lead => {
                "p-4 rounded-lg border-l-4 transition transform hover:scale-105 bg-yellow-50 border-yellow-400 shadow-md"
            }
            Self::Member => {
                "p-4 rounded-lg border-l-4 transition transform hover:scale-105 bg-blue-50 border-blue-400 shadow-sm"
            }
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Self::Lead => "font-semibold text-yellow-700",
            Self::Member => "font-semibold text-blue-700",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub display: &'static str,
    pub role: Role,
}

const fn member(display: &'static str) -> TeamMember {
    TeamMember { display, role: Role::Member }
}

const fn lead(display: &'static str) -> TeamMember {
    TeamMember { display, role: Role::Lead }
}

/// Cloud Computing Group 4, in display order.
pub const TEAM_MEMBERS: &[TeamMember] = &[
    member("Ayotomiwa-Odunayo"),
    member("Chidimma-Okafor"),
    member("Derrick-Kojo"),
    lead("Esther-Isreal-Olawepo (GROUP HEAD)"),
    member("Ifeanyi-Ogbonnaya"),
    member("Marcelinus-Saliu"),
    member("Ojo-Yusuf"),
    member("Oyinye-Nwosu"),
    member("Shotade-Razaq"),
    member("Timilehin-Adeyeye"),
    member("Ene-Victoria"),
    member("Adeyemi-Sodiq"),
    member("Oluwajimi-Olawale"),
    member("Oluwajimi-Kolawale"),
    member("Ogbuoshi-Paul"),
    member("Bright-Kofi"),
    member("Anyiam-Emmanuel"),
    member("Ejionye-Sylvaline"),
];
