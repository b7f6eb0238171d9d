//! On-disk shape of the sales data document.
//!
//! The document is a single JSON object holding one collection keyed by the
//! record-type name:
//!
//! ```json
//! { "salesReps": [ { "id": 1, "name": "John Doe", ... } ] }
//! ```
//!
//! Records are deserialized leniently here (optional sequences default to
//! empty) and then converted into [`crate::domain::sales_rep::SalesRep`],
//! which enforces the domain invariants.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::domain::sales_rep::{
    ClientContact as DomainClientContact, Deal as DomainDeal, SalesRep as DomainSalesRep,
};
use crate::domain::types::{SalesRepId, SalesRepName, TypeConstraintError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRepsDocument {
    #[serde(rename = "salesReps")]
    pub sales_reps: Vec<SalesRep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRep {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub region: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub deals: Vec<Deal>,
    #[serde(default)]
    pub clients: Vec<ClientContact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub client: String,
    pub value: Number,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientContact {
    pub name: String,
    pub industry: String,
    pub contact: String,
}

impl TryFrom<SalesRep> for DomainSalesRep {
    type Error = TypeConstraintError;

    fn try_from(record: SalesRep) -> Result<Self, Self::Error> {
        Ok(DomainSalesRep {
            id: SalesRepId::new(record.id)?,
            name: SalesRepName::new(record.name)?,
            role: record.role,
            region: record.region,
            skills: record.skills,
            deals: record.deals.into_iter().map(Into::into).collect(),
            clients: record.clients.into_iter().map(Into::into).collect(),
        })
    }
}

impl From<Deal> for DomainDeal {
    fn from(deal: Deal) -> Self {
        Self {
            client: deal.client,
            value: deal.value,
            status: deal.status,
        }
    }
}

impl From<ClientContact> for DomainClientContact {
    fn from(client: ClientContact) -> Self {
        Self {
            name: client.name,
            industry: client.industry,
            contact: client.contact,
        }
    }
}
