use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Numeric identifier of an attribute on the heating controller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrId(pub u16);

impl AttrId {
    /// No attribute, used in error cases
    pub const NONE: AttrId = AttrId(0xffff);
}

impl fmt::Display for AttrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for AttrId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u16>().map(AttrId)
    }
}

// Built-in attributes, with the Vitotrol name of each
pub const AUSSEN_TEMP: AttrId = AttrId(5373); // temp_ats_r
pub const ABGAS_TEMP: AttrId = AttrId(5372); // temp_agt_r
pub const BOILER_TEMP: AttrId = AttrId(5374); // temp_kts_r
pub const HEISSWASSER_TEMP: AttrId = AttrId(5381); // temp_ww_r
pub const HEISSWASSER_AUSGANG_TEMP: AttrId = AttrId(5382); // temp_auslauf_r
pub const HEIZWASSER_AUSGANG_TEMP: AttrId = AttrId(6053); // temp_vts_r
pub const HEIZ_NORMAL_TEMP_M1: AttrId = AttrId(82); // konf_raumsolltemp_rw
pub const HEIZ_NORMAL_TEMP_M2: AttrId = AttrId(83); // konf_raumsolltemp_rw
pub const HEIZ_PARTY_TEMP_M1: AttrId = AttrId(79); // konf_partysolltemp_rw
pub const HEIZ_PARTY_TEMP_M2: AttrId = AttrId(80); // konf_partysolltemp_rw
pub const HEIZ_REDUZIERT_TEMP_M1: AttrId = AttrId(85); // konf_raumsolltemp_reduziert_rw
pub const HEIZ_REDUZIERT_TEMP_M2: AttrId = AttrId(86); // konf_raumsolltemp_reduziert_rw
pub const HEISSWASSER_SOLL_TEMP: AttrId = AttrId(51); // konf_ww_solltemp_rw
pub const ANZAHL_BRENNERSTUNDEN: AttrId = AttrId(104); // anzahl_brennerstunden_r
pub const BRENNER_STATUS: AttrId = AttrId(600); // zustand_brenner_r
pub const ANZAHL_BRENNER_STARTS: AttrId = AttrId(111); // anzahl_brennerstart_r
pub const INTERNER_PUMPEN_STATUS: AttrId = AttrId(245); // zustand_interne_pumpe_r
pub const HEIZ_PUMPEN_STATUS_M1: AttrId = AttrId(729); // zustand_heizkreispumpe_r
pub const HEIZ_PUMPEN_STATUS_M2: AttrId = AttrId(730); // zustand_heizkreispumpe_r
pub const ZIRK_PUMPEN_STATUS: AttrId = AttrId(7181); // zustand_zirkulationspumpe_r
pub const PARTY_MODUS_M1: AttrId = AttrId(7855); // konf_partybetrieb_rw
pub const PARTY_MODUS_M2: AttrId = AttrId(7856); // konf_partybetrieb_rw
pub const ENERGIE_SPARMODUS_M1: AttrId = AttrId(7852); // konf_sparbetrieb_rw
pub const ENERGIE_SPARMODUS_M2: AttrId = AttrId(7853); // konf_sparbetrieb_rw
pub const DATUM_UHRZEIT: AttrId = AttrId(5385); // konf_uhrzeit_rw
pub const AKTUELLER_FEHLER: AttrId = AttrId(7184); // aktuelle_fehler_r
pub const FERIEN_START_M1: AttrId = AttrId(306); // konf_ferien_start_rw
pub const FERIEN_START_M2: AttrId = AttrId(307); // konf_ferien_start_rw
pub const FERIEN_ENDE_M1: AttrId = AttrId(309); // konf_ferien_ende_rw
pub const FERIEN_ENDE_M2: AttrId = AttrId(310); // konf_ferien_ende_rw
pub const ZUSTAND_FERIEN_PROG_M1: AttrId = AttrId(714); // zustand_ferienprogramm_r
pub const ZUSTAND_FERIEN_PROG_M2: AttrId = AttrId(715); // zustand_ferienprogramm_r
pub const AKTUELLE_BETRIEBSART_M1: AttrId = AttrId(708); // aktuelle_betriebsart_r
pub const AKTUELLE_BETRIEBSART_M2: AttrId = AttrId(709); // aktuelle_betriebsart_r
pub const ZUSTAND_FROSTGEFAHR_M1: AttrId = AttrId(717); // zustand_frostgefahr_r
pub const ZUSTAND_FROSTGEFAHR_M2: AttrId = AttrId(718); // zustand_frostgefahr_r
pub const BETRIEBSART_M1: AttrId = AttrId(92); // konf_betriebsart_rw
pub const BETRIEBSART_M2: AttrId = AttrId(94); // konf_betriebsart_rw
pub const NEIGUNG_M1: AttrId = AttrId(2869); // konf_neigung_rw
pub const NEIGUNG_M2: AttrId = AttrId(2871); // konf_neigung_rw
pub const NIVEAU_M1: AttrId = AttrId(2875); // konf_niveau_rw
pub const NIVEAU_M2: AttrId = AttrId(2877); // konf_niveau_rw
pub const HEIZUNGSSCHEMA: AttrId = AttrId(801); // konf_heizungsschema_r
