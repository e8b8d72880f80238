//! The code-to-tags table.

use std::fmt;

/// Code of built-up land; such polygons are not imported.
pub const BUILT_UP_CODE: &str = "3000";

/// `BUILT_UP_CODE` as read from a numeric source column.
pub const BUILT_UP_VALUE: i64 = 3000;

/// Top-level land-cover group of the RABA register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LandCoverGroup {
    FieldsAndGardens,
    PermanentPlantations,
    Grassland,
    OtherAgricultural,
    Forest,
    OtherNonAgricultural,
}

impl LandCoverGroup {
    pub fn label(&self) -> &'static str {
        match self {
            LandCoverGroup::FieldsAndGardens => "Njive in vrtovi",
            LandCoverGroup::PermanentPlantations => "Trajni nasadi",
            LandCoverGroup::Grassland => "Travniške površine",
            LandCoverGroup::OtherAgricultural => "Druge kmetijske površine",
            LandCoverGroup::Forest => "Gozd",
            LandCoverGroup::OtherNonAgricultural => "Ostala nekmetijska zemljišča",
        }
    }
}

impl fmt::Display for LandCoverGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the classification table.
#[derive(Debug, PartialEq, Eq)]
pub struct Classification {
    pub code: &'static str,
    pub group: LandCoverGroup,
    /// Category name in the register's documentation.
    pub name: &'static str,
    /// Smallest polygon the register maps for this category, in m².
    pub min_area_m2: u32,
    pub tags: &'static [(&'static str, &'static str)],
}

impl Classification {
    const fn new(
        code: &'static str,
        group: LandCoverGroup,
        name: &'static str,
        min_area_m2: u32,
        tags: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            code,
            group,
            name,
            min_area_m2,
            tags,
        }
    }
}

use LandCoverGroup::*;

pub static CLASSIFICATIONS: &[Classification] = &[
    Classification::new("1100", FieldsAndGardens, "Njiva", 1000, &[("landuse", "farmland")]),
    Classification::new(
        "1160",
        FieldsAndGardens,
        "Hmeljišče",
        500,
        &[("landuse", "farmland"), ("crop", "hop")],
    ),
    Classification::new(
        "1180",
        FieldsAndGardens,
        "Trajne rastline na njivskih površinah",
        1000,
        &[("landuse", "plant_nursery")],
    ),
    Classification::new(
        "1190",
        FieldsAndGardens,
        "Rastlinjak",
        25,
        &[("landuse", "greenhouse_horticulture")],
    ),
    Classification::new("1211", PermanentPlantations, "Vinograd", 500, &[("landuse", "vineyard")]),
    Classification::new(
        "1212",
        PermanentPlantations,
        "Matičnjak",
        500,
        &[("landuse", "plant_nursery"), ("plant", "vine")],
    ),
    Classification::new(
        "1221",
        PermanentPlantations,
        "Intenzivni sadovnjak",
        1000,
        &[("landuse", "orchard")],
    ),
    Classification::new(
        "1222",
        PermanentPlantations,
        "Ekstenzivni oziroma travniški sadovnjak",
        1000,
        &[("landuse", "orchard")],
    ),
    Classification::new(
        "1230",
        PermanentPlantations,
        "Oljčnik",
        500,
        &[("landuse", "farmland"), ("trees", "olive_trees")],
    ),
    Classification::new(
        "1240",
        PermanentPlantations,
        "Ostali trajni nasadi",
        500,
        &[("landuse", "plantation")],
    ),
    Classification::new("1300", Grassland, "Trajni travnik", 1000, &[("landuse", "meadow")]),
    Classification::new(
        "1321",
        Grassland,
        "Barjanski travnik",
        1000,
        &[("natural", "wetland"), ("wetland", "marsh")],
    ),
    Classification::new(
        "1800",
        Grassland,
        "Kmetijsko zemljišče, poraslo z gozdnim drevjem",
        1000,
        &[("landuse", "forest")],
    ),
    Classification::new(
        "1410",
        OtherAgricultural,
        "Kmetijsko zemljišče v zaraščanju",
        1000,
        &[("natural", "heath")],
    ),
    Classification::new(
        "1420",
        OtherAgricultural,
        "Plantaža gozdnega drevja",
        1000,
        &[("landuse", "forest")],
    ),
    Classification::new(
        "1500",
        OtherAgricultural,
        "Drevesa in grmičevje",
        1000,
        &[("natural", "scrub")],
    ),
    Classification::new(
        "1600",
        OtherAgricultural,
        "Neobdelano kmetijsko zemljišče",
        1000,
        &[("natural", "scrub")],
    ),
    Classification::new("2000", Forest, "Gozd", 2500, &[("landuse", "forest")]),
    Classification::new(
        BUILT_UP_CODE,
        OtherNonAgricultural,
        "Pozidano in sorodno zemljišče",
        25,
        &[("landuse", "construction"), ("fixme", "should not be imported")],
    ),
    Classification::new("4100", OtherNonAgricultural, "Barje", 5000, &[("natural", "wetland")]),
    Classification::new(
        "4210",
        OtherNonAgricultural,
        "Trstičje",
        5000,
        &[("natural", "wetland"), ("wetland", "reedbed")],
    ),
    Classification::new(
        "4220",
        OtherNonAgricultural,
        "Ostalo zamočvirjeno zemljišče",
        5000,
        &[("natural", "wetland")],
    ),
    Classification::new(
        "5000",
        OtherNonAgricultural,
        "Suho, odprto zemljišče s posebnim rastlinskim pokrovom",
        5000,
        &[("natural", "moor")],
    ),
    Classification::new(
        "6000",
        OtherNonAgricultural,
        "Odprto zemljišče brez ali z nepomembnim rastlinskim pokrovom",
        5000,
        &[("natural", "bare_rock")],
    ),
    Classification::new("7000", OtherNonAgricultural, "Voda", 25, &[("natural", "water")]),
];

/// Find the classification for an exact (already trimmed) code.
pub fn lookup(code: &str) -> Option<&'static Classification> {
    CLASSIFICATIONS.iter().find(|c| c.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_every_register_code_once() {
        let codes: HashSet<&str> = CLASSIFICATIONS.iter().map(|c| c.code).collect();
        assert_eq!(CLASSIFICATIONS.len(), 25);
        assert_eq!(codes.len(), CLASSIFICATIONS.len());
    }

    #[test]
    fn every_entry_sets_a_main_tag() {
        for entry in CLASSIFICATIONS {
            assert!(
                entry
                    .tags
                    .iter()
                    .any(|(key, _)| *key == "landuse" || *key == "natural"),
                "code {} has no landuse/natural tag",
                entry.code
            );
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(
            lookup("1160").map(|c| c.tags),
            Some(&[("landuse", "farmland"), ("crop", "hop")][..])
        );
        assert_eq!(lookup("2000").map(|c| c.group), Some(LandCoverGroup::Forest));
        assert!(lookup(" 1100").is_none());
        assert!(lookup("11").is_none());
        assert!(lookup("9999").is_none());
    }

    #[test]
    fn built_up_entry_is_flagged() {
        let entry = lookup(BUILT_UP_CODE).unwrap();
        assert!(entry.tags.contains(&("fixme", "should not be imported")));
        assert_eq!(entry.min_area_m2, 25);
    }

    #[test]
    fn entries_carry_register_names() {
        let water = lookup("7000").unwrap();
        assert_eq!(water.name, "Voda");
        assert_eq!(water.group.to_string(), "Ostala nekmetijska zemljišča");
        assert_eq!(lookup("1211").unwrap().name, "Vinograd");
        assert_eq!(LandCoverGroup::Forest.label(), "Gozd");
    }
}
