//! Compiled-in branch data.
//!
//! Keep in sync with `config/branches.yaml`.

use std::collections::BTreeMap;

use crate::branch::{BranchRecord, Coordinates};

pub(crate) const DEFAULT_MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m14!1m12!1m3!1d85000!2d106.9176!3d47.9184!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!5e0!3m2!1smn!2smn";

const HOURS: &str = "08:00-00:00";

const ALL_SERVICES: &[&str] = &["Self-service", "Wash & Dry", "Wi-Fi", "Detergent"];

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    name: &str,
    address: &str,
    district: &str,
    (lat, lng): (f64, f64),
    phone: &str,
    services: &[&str],
    images: &[&str],
) -> BranchRecord {
    BranchRecord {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        district: district.to_string(),
        coordinates: Coordinates { lat, lng },
        hours: HOURS.to_string(),
        phone: phone.to_string(),
        services: services.iter().map(|s| (*s).to_string()).collect(),
        images: images.iter().map(|s| (*s).to_string()).collect(),
    }
}

pub(crate) fn branches() -> Vec<BranchRecord> {
    vec![
        record(
            "sansar",
            "Сансар Emart",
            "Баянзүрх дүүрэг, 4-р хороо, Сансар Emart-ын 1 давхар",
            "Баянзүрх",
            (47.9227, 106.9336),
            "7711-2201",
            ALL_SERVICES,
            &["/images/branches/sansar-1.jpg", "/images/branches/sansar-2.jpg"],
        ),
        record(
            "brs-01",
            "Барс худалдааны төв",
            "Баянзүрх дүүрэг, 14-р хороо, Барс худалдааны төвийн зүүн талд",
            "Баянзүрх",
            (47.9154, 106.9702),
            "7711-2202",
            &["Self-service", "Wi-Fi"],
            &["/images/branches/bars-1.jpg"],
        ),
        record(
            "zaisan",
            "Зайсан",
            "Хан-Уул дүүрэг, 11-р хороо, Зайсан толгойн доор",
            "Хан-Уул",
            (47.8868, 106.9161),
            "7711-2203",
            ALL_SERVICES,
            &["/images/branches/zaisan-1.jpg"],
        ),
        record(
            "yarmag",
            "Яармаг",
            "Хан-Уул дүүрэг, 17-р хороо, Нисэхийн зам дагуу",
            "Хан-Уул",
            (47.8694, 106.8439),
            "7711-2204",
            &["Self-service", "Wash & Dry", "Detergent"],
            &[],
        ),
        record(
            "3-4-khoroolol",
            "3, 4-р хороолол",
            "Баянгол дүүрэг, 3-р хороо, Гандан орох замын урд",
            "Баянгол",
            (47.9182, 106.8765),
            "7711-2205",
            &["Self-service", "Wi-Fi", "Detergent"],
            &["/images/branches/34-1.jpg"],
        ),
        record(
            "dund-gol",
            "Дунд гол",
            "Чингэлтэй дүүрэг, 5-р хороо, Дунд голын гүүрний хажууд",
            "Чингэлтэй",
            (47.9268, 106.9121),
            "7711-2206",
            &["Self-service", "Wash & Dry"],
            &[],
        ),
        record(
            "nogoon-nuur",
            "Ногоон нуур",
            "Сүхбаатар дүүрэг, 16-р хороо, Ногоон нуурын баруун талд",
            "Сүхбаатар",
            (47.9363, 106.9237),
            "7711-2207",
            &["Self-service", "Wash & Dry", "Wi-Fi"],
            &["/images/branches/nogoon-nuur-1.jpg"],
        ),
    ]
}

/// Keys are a mix of display names and ids; `dund-gol` has no entry.
pub(crate) fn map_embeds() -> BTreeMap<String, String> {
    [
        (
            "Сансар Emart",
            "https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d2674!2d106.9336!3d47.9227!3m2!1i1024!2i768!4f13.1!5e0!3m2!1smn!2smn",
        ),
        (
            "Барс худалдааны төв",
            "https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d2674!2d106.9702!3d47.9154!3m2!1i1024!2i768!4f13.1!5e0!3m2!1smn!2smn",
        ),
        (
            "zaisan",
            "https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d2674!2d106.9161!3d47.8868!3m2!1i1024!2i768!4f13.1!5e0!3m2!1smn!2smn",
        ),
        (
            "Яармаг",
            "https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d2674!2d106.8439!3d47.8694!3m2!1i1024!2i768!4f13.1!5e0!3m2!1smn!2smn",
        ),
        (
            "3-4-khoroolol",
            "https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d2674!2d106.8765!3d47.9182!3m2!1i1024!2i768!4f13.1!5e0!3m2!1smn!2smn",
        ),
        (
            "Ногоон нуур",
            "https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d2674!2d106.9237!3d47.9363!3m2!1i1024!2i768!4f13.1!5e0!3m2!1smn!2smn",
        ),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
