// gl-core/src/units.rs

use core::fmt;

use uom::si::f64::Length as UomLength;

// Public canonical unit types (SI, f64)
pub type Length = UomLength;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn to_m(l: Length) -> f64 {
    use uom::si::length::meter;
    l.get::<meter>()
}

/// Purchase unit attached to bill-of-materials and material rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    /// Each (count)
    U,
    M,
    M2,
    M3,
    Kg,
    L,
    Cm,
    Mm,
}

impl Unit {
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::U => "u",
            Unit::M => "m",
            Unit::M2 => "m2",
            Unit::M3 => "m3",
            Unit::Kg => "kg",
            Unit::L => "l",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _l = m(2.0);
        let _d = mm(19.0);
    }

    #[test]
    fn millimetres_convert_to_metres() {
        assert!((to_m(mm(19.0)) - 0.019).abs() < 1e-12);
        assert!((to_m(m(2.5) + mm(500.0)) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn unit_symbols() {
        assert_eq!(Unit::U.to_string(), "u");
        assert_eq!(Unit::M.to_string(), "m");
    }
}
