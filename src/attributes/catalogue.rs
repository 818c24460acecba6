//! Built-in attribute catalogue of the Vitotrol service

use super::ids::*;
use super::{AttrAccess, AttrId, AttrRef};
use crate::values::ValueType;

const CURRENT_MODES: [&str; 4] = [
    "Abschaltbetrieb",
    "Reduzierter Betrieb",
    "Normalbetrieb",
    "Dauernd Normalbetrieb",
];

const MODES: [&str; 5] = [
    "Abschalt",
    "Nur WW",
    "Heizen + WW",
    "Dauernd Reduziert",
    "Dauernd Normal",
];

// Code 0 is unused
const HEATING_SCHEMES: [&str; 11] = [
    "",
    "1 A1",
    "2 A1 + WW",
    "3 M2",
    "4 M2 + WW",
    "5 A1 + M2",
    "6 A1 + M2 + WW",
    "7 M2 + M3",
    "8 M2 + M3 + WW",
    "9 A1 + M2 + M3",
    "10 A1 + M2 + M3 + WW",
];

/// Descriptors of every attribute known out of the box
pub fn builtin() -> Vec<(AttrId, AttrRef)> {
    vec![
        (
            AUSSEN_TEMP,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_ONLY,
                "AussenTemp",
                "Außen Temperatur",
            ),
        ),
        (
            ABGAS_TEMP,
            AttrRef::new(ValueType::Double, AttrAccess::READ_ONLY, "AbgasTemp", "Abgas Temperatur"),
        ),
        (
            BOILER_TEMP,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_ONLY,
                "BoilerTemp",
                "Boiler Temperatur",
            ),
        ),
        (
            HEISSWASSER_TEMP,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_ONLY,
                "HeisswasserTemp",
                "Heißwasser Temperatur",
            ),
        ),
        (
            HEISSWASSER_AUSGANG_TEMP,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_ONLY,
                "HeisswasserAusgangTemp",
                "Heißwasser Ausgangstemperatur",
            ),
        ),
        (
            HEIZWASSER_AUSGANG_TEMP,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_ONLY,
                "HeizwasserAusgangTemp",
                "Heizwasser Ausgangstemperatur",
            ),
        ),
        (
            HEIZ_NORMAL_TEMP_M1,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_WRITE,
                "HeizNormalTempM1",
                "Normale Raumsolltemperatur Heizkörper",
            ),
        ),
        (
            HEIZ_NORMAL_TEMP_M2,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_WRITE,
                "HeizNormalTempM2",
                "Normale Raumsolltemperatur Fußbodenheizung",
            ),
        ),
        (
            HEIZ_PARTY_TEMP_M1,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_WRITE,
                "HeizPartyTempM1",
                "Party Raumtemperatur Heizkörper",
            ),
        ),
        (
            HEIZ_PARTY_TEMP_M2,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_WRITE,
                "HeizPartyTempM2",
                "Party Raumtemperatur Fußbodenheizung",
            ),
        ),
        (
            HEIZ_REDUZIERT_TEMP_M1,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_WRITE,
                "HeizReduziertTempM1",
                "Reduzierte Raumtemperatur Heizkörper",
            ),
        ),
        (
            HEIZ_REDUZIERT_TEMP_M2,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_WRITE,
                "HeizReduziertTempM2",
                "Reduzierte Raumtemperatur Fußbodenheizung",
            ),
        ),
        (
            HEISSWASSER_SOLL_TEMP,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_WRITE,
                "HeisswasserSollTemp",
                "Solltemperatur Warmwasser",
            ),
        ),
        (
            ANZAHL_BRENNERSTUNDEN,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_ONLY,
                "AnzahlBrennerstunden",
                "Brennerstundenanzahl",
            ),
        ),
        (
            BRENNER_STATUS,
            AttrRef::new(
                ValueType::on_off(),
                AttrAccess::READ_ONLY,
                "BrennerStatus",
                "Brenner Status",
            ),
        ),
        (
            ANZAHL_BRENNER_STARTS,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_WRITE,
                "AnzahlBrennerStarts",
                "Anzahl von Brennerstarts",
            ),
        ),
        (
            INTERNER_PUMPEN_STATUS,
            AttrRef::new(
                ValueType::enumeration(["Aus", "Ein", "Aus2", "Ein2"]),
                AttrAccess::READ_ONLY,
                "InternerPumpenStatus",
                "Interner Pumpen Status",
            ),
        ),
        (
            HEIZ_PUMPEN_STATUS_M1,
            AttrRef::new(
                ValueType::on_off(),
                AttrAccess::READ_ONLY,
                "HeizPumpenStatusM1",
                "Zustand Heizkreispumpe Heizkörper",
            ),
        ),
        (
            HEIZ_PUMPEN_STATUS_M2,
            AttrRef::new(
                ValueType::on_off(),
                AttrAccess::READ_ONLY,
                "HeizPumpenStatusM2",
                "Zustand Heizkreispumpe Hußbodenheizung",
            ),
        ),
        (
            ZIRK_PUMPEN_STATUS,
            AttrRef::new(
                ValueType::on_off(),
                AttrAccess::READ_ONLY,
                "ZirkPumpenStatus",
                "Zustand Zirkulationspumpe",
            ),
        ),
        (
            PARTY_MODUS_M1,
            AttrRef::new(
                ValueType::on_off(),
                AttrAccess::READ_WRITE,
                "PartyModusM1",
                "Partymodus Heizkörper",
            ),
        ),
        (
            PARTY_MODUS_M2,
            AttrRef::new(
                ValueType::on_off(),
                AttrAccess::READ_WRITE,
                "PartyModusM2",
                "Partymodus Fußbodenheizung",
            ),
        ),
        (
            ENERGIE_SPARMODUS_M1,
            AttrRef::new(
                ValueType::on_off(),
                AttrAccess::READ_WRITE,
                "EnergieSparmodusM1",
                "Energiesparmodus Heizkörper",
            ),
        ),
        (
            ENERGIE_SPARMODUS_M2,
            AttrRef::new(
                ValueType::on_off(),
                AttrAccess::READ_WRITE,
                "EnergieSparmodusM2",
                "Energiesparmodus Fußbodenheizung",
            ),
        ),
        (
            DATUM_UHRZEIT,
            AttrRef::new(
                ValueType::Date,
                AttrAccess::READ_WRITE,
                "DatumUhrzeit",
                "Aktuelles Datum mir Uhrzeit",
            ),
        ),
        (
            AKTUELLER_FEHLER,
            AttrRef::new(
                ValueType::String,
                AttrAccess::READ_ONLY,
                "AktuellerFehler",
                "Fehlermeldung",
            ),
        ),
        (
            FERIEN_START_M1,
            AttrRef::new(
                ValueType::Date,
                AttrAccess::READ_WRITE,
                "FerienStartM1",
                "Start der Ferienzeit für Heizkörper",
            ),
        ),
        (
            FERIEN_START_M2,
            AttrRef::new(
                ValueType::Date,
                AttrAccess::READ_WRITE,
                "FerienStartM2",
                "Start der Ferienzeit für Fußbodenheizung",
            ),
        ),
        (
            FERIEN_ENDE_M1,
            AttrRef::new(
                ValueType::Date,
                AttrAccess::READ_WRITE,
                "FerienEndeM1",
                "Ende der Ferienzeit für Heizkörper",
            ),
        ),
        (
            FERIEN_ENDE_M2,
            AttrRef::new(
                ValueType::Date,
                AttrAccess::READ_WRITE,
                "FerienEndeM2",
                "Ende der Ferienzeit für Fußbodenheizung",
            ),
        ),
        (
            ZUSTAND_FERIEN_PROG_M1,
            AttrRef::new(
                ValueType::active_inactive(),
                AttrAccess::READ_ONLY,
                "ZustandFerienProgM1",
                "Zustand Ferienprogramm Heizkörper",
            ),
        ),
        (
            ZUSTAND_FERIEN_PROG_M2,
            AttrRef::new(
                ValueType::active_inactive(),
                AttrAccess::READ_ONLY,
                "ZustandFerienProgM2",
                "Zustand Ferienprogramm Fußbodenheizung",
            ),
        ),
        (
            AKTUELLE_BETRIEBSART_M1,
            AttrRef::new(
                ValueType::enumeration(CURRENT_MODES),
                AttrAccess::READ_ONLY,
                "AktuelleBetriebsartM1",
                "Betriebsart Heizkörper",
            ),
        ),
        (
            AKTUELLE_BETRIEBSART_M2,
            AttrRef::new(
                ValueType::enumeration(CURRENT_MODES),
                AttrAccess::READ_ONLY,
                "AktuelleBetriebsartM2",
                "Betriebsart Fußbodenheizung",
            ),
        ),
        (
            ZUSTAND_FROSTGEFAHR_M1,
            AttrRef::new(
                ValueType::active_inactive(),
                AttrAccess::READ_ONLY,
                "ZustandFrostgefahrM1",
                "Zustand Frostgefahr Heizkörper",
            ),
        ),
        (
            ZUSTAND_FROSTGEFAHR_M2,
            AttrRef::new(
                ValueType::active_inactive(),
                AttrAccess::READ_ONLY,
                "ZustandFrostgefahrM2",
                "Zustand Frostgefahr Fußbodenheizung",
            ),
        ),
        (
            BETRIEBSART_M1,
            AttrRef::new(
                ValueType::enumeration(MODES),
                AttrAccess::READ_WRITE,
                "BetriebsartM1",
                "Betriebsart Heizkörper",
            ),
        ),
        (
            BETRIEBSART_M2,
            AttrRef::new(
                ValueType::enumeration(MODES),
                AttrAccess::READ_WRITE,
                "konf_betriebsart_rw-0x005e",
                "Betriebsart Fussbodenheizung",
            ),
        ),
        (
            NEIGUNG_M1,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_WRITE,
                "NeigungM1",
                "Neigung Heizkörper",
            ),
        ),
        (
            NEIGUNG_M2,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_WRITE,
                "NeigungM2",
                "Neigung Fussbodenheizung",
            ),
        ),
        (
            NIVEAU_M1,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_WRITE,
                "NiveauM1",
                "Niveau Heizkörper",
            ),
        ),
        (
            NIVEAU_M2,
            AttrRef::new(
                ValueType::Double,
                AttrAccess::READ_WRITE,
                "NiveauM2",
                "Niveau Fussbodenheizung",
            ),
        ),
        (
            HEIZUNGSSCHEMA,
            AttrRef::new(
                ValueType::enumeration(HEATING_SCHEMES),
                AttrAccess::READ_ONLY,
                "Heizungsschema",
                "Heizungsschema für Anlage",
            ),
        ),
    ]
}
