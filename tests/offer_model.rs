use serde_json::json;
use voamigo::models::{Offer, OfferPrice, Segment};

#[test]
fn test_cash_offer_parses() {
    let offer: Offer = serde_json::from_value(json!({
        "id": "o1",
        "source": "amadeus",
        "type": "cash",
        "price": {"cash": {"amount": 1534.9, "currency": "BRL"}},
        "segments": [],
        "duration_minutes": 185,
        "stops": 1,
        "baggage_included": true,
        "score": 0.82,
        "explanation": "cheapest with a bag"
    }))
    .unwrap();

    assert_eq!(offer.id, "o1");
    assert_eq!(offer.source, "amadeus");
    match &offer.price {
        OfferPrice::Cash(cash) => {
            assert_eq!(cash.amount, 1534.9);
            assert_eq!(cash.currency, "BRL");
        }
        other => panic!("expected cash, got {:?}", other),
    }
    assert_eq!(offer.score, Some(0.82));
    assert_eq!(offer.explanation.as_deref(), Some("cheapest with a bag"));
}

#[test]
fn test_miles_offer_parses() {
    let offer: Offer = serde_json::from_value(json!({
        "id": "o2",
        "source": "smiles",
        "type": "miles",
        "price": {"miles": {"program": "smiles", "points": 25000, "taxes": 118.7}},
        "segments": [],
        "duration_minutes": 95,
        "stops": 0,
        "baggage_included": false
    }))
    .unwrap();

    match &offer.price {
        OfferPrice::Miles(miles) => {
            assert_eq!(miles.program, "smiles");
            assert_eq!(miles.points, 25000);
            assert_eq!(miles.taxes, 118.7);
        }
        other => panic!("expected miles, got {:?}", other),
    }
    assert_eq!(offer.score, None);
    assert_eq!(offer.explanation, None);
}

#[test]
fn test_price_arm_must_match_type() {
    // type says cash, payload carries miles
    let result = serde_json::from_value::<Offer>(json!({
        "id": "o3",
        "source": "x",
        "type": "cash",
        "price": {"miles": {"program": "latam_pass", "points": 10000, "taxes": 50.0}},
        "segments": [],
        "duration_minutes": 60,
        "stops": 0,
        "baggage_included": false
    }));
    assert!(result.is_err());
}

#[test]
fn test_both_price_arms_rejected() {
    let result = serde_json::from_value::<Offer>(json!({
        "id": "o4",
        "source": "x",
        "type": "miles",
        "price": {
            "cash": {"amount": 100.0, "currency": "BRL"},
            "miles": {"program": "tudoazul", "points": 9000, "taxes": 30.0}
        },
        "segments": [],
        "duration_minutes": 60,
        "stops": 0,
        "baggage_included": false
    }));
    assert!(result.is_err());
}

#[test]
fn test_empty_price_rejected() {
    let result = serde_json::from_value::<Offer>(json!({
        "id": "o5",
        "source": "x",
        "type": "cash",
        "price": {},
        "segments": [],
        "duration_minutes": 60,
        "stops": 0,
        "baggage_included": false
    }));
    assert!(result.is_err());
}

#[test]
fn test_offer_serializes_back_to_wire_shape() {
    let offer: Offer = serde_json::from_value(json!({
        "id": "o1",
        "source": "x",
        "type": "cash",
        "price": {"cash": {"amount": 500.0, "currency": "USD"}},
        "segments": [],
        "duration_minutes": 120,
        "stops": 0,
        "baggage_included": true
    }))
    .unwrap();

    let value = serde_json::to_value(&offer).unwrap();
    assert_eq!(value["type"], "cash");
    assert_eq!(value["price"]["cash"]["currency"], "USD");
    assert!(value["price"].get("miles").is_none());
}

#[test]
fn test_segment_known_and_unknown_fields() {
    let segment: Segment = serde_json::from_value(json!({
        "carrier": "G3",
        "flight_number": "G3 1234",
        "origin": "GRU",
        "destination": "GIG",
        "depart": "2026-11-12T08:30:00Z",
        "arrive": "2026-11-12T09:35:00Z",
        "duration_minutes": 65,
        "fare_class": "Y",
        "equipment": "B738",
        "operating_carrier": "G3"
    }))
    .unwrap();

    assert_eq!(segment.carrier.as_deref(), Some("G3"));
    assert_eq!(segment.origin.as_deref(), Some("GRU"));
    assert_eq!(segment.duration_minutes, Some(65));
    // Fields this client does not model survive untouched.
    assert_eq!(segment.extra["equipment"], "B738");
    assert_eq!(segment.extra["operating_carrier"], "G3");

    let back = serde_json::to_value(&segment).unwrap();
    assert_eq!(back["equipment"], "B738");
}

#[test]
fn test_segment_all_fields_optional() {
    let segment: Segment = serde_json::from_value(json!({})).unwrap();
    assert!(segment.carrier.is_none());
    assert!(segment.extra.is_empty());
}
