pub mod terminal;

use async_trait::async_trait;

/// Fixed identifiers of the page elements the binder reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Users,
    Create,
    Organizer,
    Participants,
    Start,
    End,
    Note,
    CreateResult,
    List,
    ListPhone,
    BookingsOut,
    AdminPhone,
    MarkNoShow,
    ResetNoShow,
    LoadRules,
    SaveRules,
    RuleNoShowThreshold,
    RuleAdvanceHours,
    RuleMaxDurationDays,
    AdminOut,
}

impl ElementId {
    pub const ALL: [ElementId; 20] = [
        ElementId::Users,
        ElementId::Create,
        ElementId::Organizer,
        ElementId::Participants,
        ElementId::Start,
        ElementId::End,
        ElementId::Note,
        ElementId::CreateResult,
        ElementId::List,
        ElementId::ListPhone,
        ElementId::BookingsOut,
        ElementId::AdminPhone,
        ElementId::MarkNoShow,
        ElementId::ResetNoShow,
        ElementId::LoadRules,
        ElementId::SaveRules,
        ElementId::RuleNoShowThreshold,
        ElementId::RuleAdvanceHours,
        ElementId::RuleMaxDurationDays,
        ElementId::AdminOut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::Users => "users",
            ElementId::Create => "create",
            ElementId::Organizer => "organizer",
            ElementId::Participants => "participants",
            ElementId::Start => "start",
            ElementId::End => "end",
            ElementId::Note => "note",
            ElementId::CreateResult => "createResult",
            ElementId::List => "list",
            ElementId::ListPhone => "listPhone",
            ElementId::BookingsOut => "bookingsOut",
            ElementId::AdminPhone => "adminPhone",
            ElementId::MarkNoShow => "markNoShow",
            ElementId::ResetNoShow => "resetNoShow",
            ElementId::LoadRules => "loadRules",
            ElementId::SaveRules => "saveRules",
            ElementId::RuleNoShowThreshold => "ruleNoShowThreshold",
            ElementId::RuleAdvanceHours => "ruleAdvanceHours",
            ElementId::RuleMaxDurationDays => "ruleMaxDurationDays",
            ElementId::AdminOut => "adminOut",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    pub fn is_button(&self) -> bool {
        matches!(
            self,
            ElementId::Create
                | ElementId::List
                | ElementId::MarkNoShow
                | ElementId::ResetNoShow
                | ElementId::LoadRules
                | ElementId::SaveRules
        )
    }

    pub fn is_input(&self) -> bool {
        matches!(
            self,
            ElementId::Organizer
                | ElementId::Participants
                | ElementId::Start
                | ElementId::End
                | ElementId::Note
                | ElementId::ListPhone
                | ElementId::AdminPhone
                | ElementId::RuleNoShowThreshold
                | ElementId::RuleAdvanceHours
                | ElementId::RuleMaxDurationDays
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Click(ElementId),
}

/// Rendering surface. Implementations only change the content of existing elements.
#[async_trait]
pub trait ViewPort: Send + Sync {
    /// Current value of an input; empty when unset.
    fn read_field(&self, id: ElementId) -> String;

    /// Replaces the container's items.
    fn render_list(&self, id: ElementId, items: &[String]);

    /// Replaces the element's text.
    fn set_text(&self, id: ElementId, text: &str);

    /// Next user event, `None` once the view is closed.
    async fn next_event(&self) -> Option<UiEvent>;
}
