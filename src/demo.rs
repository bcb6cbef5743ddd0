//! Sample catalog and driver output for the demo binary

use crate::matcher::VehicleMatcher;

/// Reference catalog of Indian-market passenger vehicles
pub const SAMPLE_CATALOG: &[&str] = &[
    "ford_aspire",
    "ford_ecosport",
    "ford_endeavour",
    "ford_figo",
    "honda_amaze",
    "honda_city",
    "honda_wr_v",
    "hyundai_aura",
    "hyundai_grand_i10",
    "hyundai_i10",
    "hyundai_i20",
    "hyundai_venue",
    "hyundai_verna",
    "mahindra_bolero",
    "mahindra_marazzo",
    "mahindra_thar",
    "mahindra_tuv300",
    "mahindra_xuv300",
    "mahindra_xuv500",
    "maruti_ertiga",
    "maruti_swift",
    "maruti_vitara_brezza",
    "maruti_wagonr",
    "maruti_baleno",
    "maruti_ciaz",
    "tata_altroz",
    "tata_harrier",
    "tata_nexon",
    "tata_tiago",
    "tata_tigor",
    "tata_safari",
    "toyota_fortuner",
    "toyota_glanza",
    "toyota_innova_crysta",
    "toyota_yaris",
];

/// Registration-record style descriptions
pub const SAMPLE_INPUTS: &[&str] = &[
    "FORD INDIA PVT LTD-FIGOASPIRE 1.2 PETROL TREND+MT",
    "FORD INDIA PVT LTD-FORD FIGO ASPIRE 1.5 TDCI DIES",
    "FORD INDIA PVT LTD-FIGOASPIRE 1.5 PETROL TITNMAT",
    "FORD INDIA PVT LTD-FIGO 1.5 D AMBIENT MT BS IV",
    "HYUNDAI MOTOR INDIA LTD-AURA 1.2MT KAPPA SX",
    "HYUNDAI MOTOR INDIA LTD-AURA 1.2MT KAPPA SX(O)",
    "NA-AURA 1.2MT CRDI S",
    "HYUNDAI MOTOR INDIA LTD-AURA 1.2AMT KAPPA SX+",
];

/// Matcher over [`SAMPLE_CATALOG`]
pub fn sample_matcher() -> VehicleMatcher {
    // Every sample identifier has a brand and a model
    VehicleMatcher::new(SAMPLE_CATALOG.iter().copied()).expect("sample catalog is well formed")
}

/// One block per input: the input, the best match and its confidence
pub fn render_report(matcher: &VehicleMatcher, inputs: &[&str]) -> String {
    let mut report = String::new();

    for input in inputs {
        let result = matcher.best_match(input);
        let best = result.best_match.as_deref().unwrap_or("None");
        report.push_str(&format!(
            "Input: {input}\nBest Match: {best}\nConfidence: {:.2}\n\n",
            result.confidence
        ));
    }

    report
}
