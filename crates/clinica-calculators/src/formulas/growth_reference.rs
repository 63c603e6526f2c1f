//! Bundled growth reference: WHO Child Growth Standards (2006), 0–60 months.
//!
//! Only anchor rows are bundled (yearly after the first year, every 5 cm for
//! weight-for-height) with parameters rounded to the published precision of
//! the summary tables; intermediate points are interpolated. Deployments that
//! need the full monthly tables load them with [`GrowthReference::from_json`].

use std::sync::LazyLock;

use super::growth::{GrowthReference, LmsPoint, SexCurves};

const fn row(x: f64, l: f64, m: f64, s: f64) -> LmsPoint {
    LmsPoint { x, l, m, s }
}

const WEIGHT_FOR_AGE_MALE: &[LmsPoint] = &[
    row(0.0, 0.3487, 3.3464, 0.14602),
    row(6.0, 0.1257, 7.9340, 0.11080),
    row(12.0, 0.0644, 9.6479, 0.10925),
    row(24.0, -0.0137, 12.1515, 0.11426),
    row(36.0, -0.0756, 14.3435, 0.12034),
    row(48.0, -0.1424, 16.3489, 0.12720),
    row(60.0, -0.2026, 18.3366, 0.13517),
];

const WEIGHT_FOR_AGE_FEMALE: &[LmsPoint] = &[
    row(0.0, 0.3809, 3.2322, 0.14171),
    row(6.0, -0.0756, 7.2970, 0.12204),
    row(12.0, -0.2024, 8.9481, 0.12268),
    row(24.0, -0.2941, 11.4775, 0.12390),
    row(36.0, -0.3566, 13.8503, 0.13098),
    row(48.0, -0.3988, 16.0697, 0.13746),
    row(60.0, -0.4354, 18.2193, 0.14339),
];

const HEIGHT_FOR_AGE_MALE: &[LmsPoint] = &[
    row(0.0, 1.0, 49.8842, 0.03795),
    row(6.0, 1.0, 67.6236, 0.03165),
    row(12.0, 1.0, 75.7488, 0.03137),
    row(24.0, 1.0, 87.1161, 0.03507),
    row(36.0, 1.0, 96.0835, 0.03707),
    row(48.0, 1.0, 103.3273, 0.03949),
    row(60.0, 1.0, 109.9638, 0.04134),
];

const HEIGHT_FOR_AGE_FEMALE: &[LmsPoint] = &[
    row(0.0, 1.0, 49.1477, 0.03790),
    row(6.0, 1.0, 65.7311, 0.03448),
    row(12.0, 1.0, 74.0153, 0.03479),
    row(24.0, 1.0, 85.7153, 0.03764),
    row(36.0, 1.0, 95.0515, 0.03987),
    row(48.0, 1.0, 102.7312, 0.04189),
    row(60.0, 1.0, 109.4233, 0.04340),
];

const BMI_FOR_AGE_MALE: &[LmsPoint] = &[
    row(0.0, -0.3053, 13.4069, 0.09560),
    row(6.0, -0.0631, 17.3422, 0.08030),
    row(12.0, -0.1872, 16.8987, 0.07900),
    row(24.0, -0.6187, 16.0189, 0.07785),
    row(36.0, -0.7387, 15.6105, 0.07931),
    row(48.0, -0.8137, 15.2931, 0.08136),
    row(60.0, -0.8597, 15.2641, 0.08399),
];

const BMI_FOR_AGE_FEMALE: &[LmsPoint] = &[
    row(0.0, -0.0631, 13.3363, 0.09272),
    row(6.0, -0.1604, 16.9141, 0.08558),
    row(12.0, -0.2353, 16.3534, 0.08541),
    row(24.0, -0.5684, 15.7405, 0.08452),
    row(36.0, -0.8350, 15.3951, 0.08746),
    row(48.0, -1.0141, 15.2585, 0.09102),
    row(60.0, -1.1197, 15.2377, 0.09495),
];

const WEIGHT_FOR_HEIGHT_MALE: &[LmsPoint] = &[
    row(45.0, -0.3521, 2.4410, 0.09182),
    row(50.0, -0.3521, 3.3493, 0.08767),
    row(55.0, -0.3521, 4.5706, 0.08358),
    row(60.0, -0.3521, 5.9804, 0.08059),
    row(65.0, -0.3521, 7.4327, 0.07898),
    row(70.0, -0.3521, 8.6369, 0.07846),
    row(75.0, -0.3521, 9.6536, 0.07833),
    row(80.0, -0.3521, 10.6125, 0.07840),
    row(85.0, -0.3521, 11.6932, 0.07880),
    row(90.0, -0.3521, 12.8637, 0.07960),
    row(95.0, -0.3521, 14.0687, 0.08075),
    row(100.0, -0.3521, 15.3616, 0.08221),
    row(105.0, -0.3521, 16.7823, 0.08395),
    row(110.0, -0.3521, 18.3368, 0.08592),
    row(115.0, -0.3521, 20.0396, 0.08808),
    row(120.0, -0.3521, 21.9032, 0.09039),
];

const WEIGHT_FOR_HEIGHT_FEMALE: &[LmsPoint] = &[
    row(45.0, -0.3833, 2.4607, 0.09029),
    row(50.0, -0.3833, 3.3828, 0.08884),
    row(55.0, -0.3833, 4.5430, 0.08761),
    row(60.0, -0.3833, 5.8630, 0.08653),
    row(65.0, -0.3833, 7.2246, 0.08562),
    row(70.0, -0.3833, 8.4130, 0.08497),
    row(75.0, -0.3833, 9.4503, 0.08469),
    row(80.0, -0.3833, 10.4453, 0.08474),
    row(85.0, -0.3833, 11.5525, 0.08513),
    row(90.0, -0.3833, 12.7455, 0.08589),
    row(95.0, -0.3833, 13.9911, 0.08696),
    row(100.0, -0.3833, 15.3222, 0.08827),
    row(105.0, -0.3833, 16.7818, 0.08979),
    row(110.0, -0.3833, 18.4027, 0.09147),
    row(115.0, -0.3833, 20.2091, 0.09327),
    row(120.0, -0.3833, 22.2079, 0.09516),
];

static WHO_2006: LazyLock<GrowthReference> = LazyLock::new(|| GrowthReference {
    name: "OMS 2006 (0-60 meses)".to_string(),
    weight_for_age: curves(WEIGHT_FOR_AGE_MALE, WEIGHT_FOR_AGE_FEMALE),
    height_for_age: curves(HEIGHT_FOR_AGE_MALE, HEIGHT_FOR_AGE_FEMALE),
    weight_for_height: curves(WEIGHT_FOR_HEIGHT_MALE, WEIGHT_FOR_HEIGHT_FEMALE),
    bmi_for_age: curves(BMI_FOR_AGE_MALE, BMI_FOR_AGE_FEMALE),
});

fn curves(male: &[LmsPoint], female: &[LmsPoint]) -> SexCurves {
    SexCurves {
        male: male.to_vec(),
        female: female.to_vec(),
    }
}

/// The bundled WHO 2006 anchor reference.
pub fn who_2006() -> &'static GrowthReference {
    &WHO_2006
}
