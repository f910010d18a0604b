use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A priced flight itinerary option, priced either in currency or in
/// loyalty-program points. The wire shape pairs a `type` discriminator with
/// a `price` object holding one arm (`cash` or `miles`); the conversion
/// through [`OfferWire`] rejects payloads where the arm does not match the
/// discriminator.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "OfferWire", into = "OfferWire")]
pub struct Offer {
    pub id: String,
    pub source: String,
    pub price: OfferPrice,
    pub segments: Vec<Segment>,
    pub duration_minutes: u32,
    pub stops: u32,
    pub baggage_included: bool,
    pub score: Option<f64>,
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OfferPrice {
    Cash(CashPrice),
    Miles(MilesPrice),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CashPrice {
    pub amount: f64,
    pub currency: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MilesPrice {
    pub program: String,
    pub points: u64,
    pub taxes: f64,
}

/// One itinerary leg. Backends disagree on what a leg carries, so every
/// field is optional and unrecognized fields survive a round trip through
/// `extra`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Segment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depart: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare_class: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum OfferType {
    Cash,
    Miles,
}

#[derive(Serialize, Deserialize, Clone)]
struct PriceWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cash: Option<CashPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    miles: Option<MilesPrice>,
}

#[derive(Serialize, Deserialize, Clone)]
struct OfferWire {
    id: String,
    source: String,
    #[serde(rename = "type")]
    offer_type: OfferType,
    price: PriceWire,
    #[serde(default)]
    segments: Vec<Segment>,
    duration_minutes: u32,
    stops: u32,
    baggage_included: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
}

impl TryFrom<OfferWire> for Offer {
    type Error = String;

    fn try_from(wire: OfferWire) -> Result<Self, Self::Error> {
        let price = match (wire.offer_type, wire.price.cash, wire.price.miles) {
            (OfferType::Cash, Some(cash), None) => OfferPrice::Cash(cash),
            (OfferType::Miles, None, Some(miles)) => OfferPrice::Miles(miles),
            (OfferType::Cash, None, _) => {
                return Err(format!("offer {}: type is cash but price.cash is missing", wire.id))
            }
            (OfferType::Miles, _, None) => {
                return Err(format!("offer {}: type is miles but price.miles is missing", wire.id))
            }
            _ => {
                return Err(format!(
                    "offer {}: price arm does not match offer type",
                    wire.id
                ))
            }
        };

        Ok(Offer {
            id: wire.id,
            source: wire.source,
            price,
            segments: wire.segments,
            duration_minutes: wire.duration_minutes,
            stops: wire.stops,
            baggage_included: wire.baggage_included,
            score: wire.score,
            explanation: wire.explanation,
        })
    }
}

impl From<Offer> for OfferWire {
    fn from(offer: Offer) -> Self {
        let (offer_type, cash, miles) = match offer.price {
            OfferPrice::Cash(cash) => (OfferType::Cash, Some(cash), None),
            OfferPrice::Miles(miles) => (OfferType::Miles, None, Some(miles)),
        };

        OfferWire {
            id: offer.id,
            source: offer.source,
            offer_type,
            price: PriceWire { cash, miles },
            segments: offer.segments,
            duration_minutes: offer.duration_minutes,
            stops: offer.stops,
            baggage_included: offer.baggage_included,
            score: offer.score,
            explanation: offer.explanation,
        }
    }
}
