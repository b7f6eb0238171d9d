use serde::Serialize;
use serde_json::Number;

use crate::domain::types::{SalesRepId, SalesRepName};

/// A sales representative together with the deals and clients they own.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SalesRep {
    pub id: SalesRepId,
    pub name: SalesRepName,
    pub role: String,
    pub region: String,
    pub skills: Vec<String>,
    pub deals: Vec<Deal>,
    pub clients: Vec<ClientContact>,
}

impl SalesRep {
    /// Builds a representative with no skills, deals, or clients.
    #[must_use]
    pub fn new(
        id: SalesRepId,
        name: SalesRepName,
        role: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name,
            role: role.into(),
            region: region.into(),
            skills: Vec::new(),
            deals: Vec::new(),
            clients: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_deals(mut self, deals: Vec<Deal>) -> Self {
        self.deals = deals;
        self
    }

    #[must_use]
    pub fn with_clients(mut self, clients: Vec<ClientContact>) -> Self {
        self.clients = clients;
        self
    }
}

/// A deal negotiated by a representative. `value` keeps the number exactly
/// as it appeared in the source document.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Deal {
    pub client: String,
    pub value: Number,
    pub status: String,
}

/// A client account managed by a representative.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ClientContact {
    pub name: String,
    pub industry: String,
    pub contact: String,
}
