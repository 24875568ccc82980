/// The bookable half-hour grid: mornings 09:00-11:30, afternoons 14:00-17:00.
const STANDARD_SLOTS: [&str; 13] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30", "17:00",
];

/// Nominally bookable time-of-day slots for a (practitioner, date) pair.
///
/// The catalog is identical for every practitioner and date; slots consumed
/// by existing appointments are not subtracted.
pub struct SlotCatalog;

impl SlotCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn slots_for(
        &self,
        _practitioner_id: Option<&str>,
        _date: Option<&str>,
    ) -> &'static [&'static str] {
        &STANDARD_SLOTS
    }
}

impl Default for SlotCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_the_same_for_every_practitioner_and_date() {
        let catalog = SlotCatalog::new();
        let a = catalog.slots_for(Some("D101"), Some("2024-01-20"));
        let b = catalog.slots_for(Some("D601"), None);

        assert_eq!(a, b);
        assert_eq!(a.len(), 13);
        assert_eq!(a[0], "09:00");
        assert_eq!(a[12], "17:00");
    }
}
