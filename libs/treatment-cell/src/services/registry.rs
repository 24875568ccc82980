use practitioner_cell::models::PractitionerProfile;

/// Maps each treatment type to its ordered pool of qualified practitioners.
///
/// Pool order is load-bearing: the first entry is the default assignment when
/// a booking does not request a specific practitioner. Unknown treatment types
/// resolve to an empty pool rather than an error, which the assignment policy
/// relies on to degrade silently.
pub struct TreatmentRegistry {
    pools: Vec<(String, Vec<PractitionerProfile>)>,
}

fn profile(
    id: &str,
    name: &str,
    specialty: &str,
    experience_years: u8,
    rating: f32,
    contact: &str,
) -> PractitionerProfile {
    PractitionerProfile {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        experience_years,
        rating,
        contact: contact.to_string(),
    }
}

impl TreatmentRegistry {
    /// The demo catalog: six treatment types, three practitioners each.
    pub fn with_demo_catalog() -> Self {
        let pools = vec![
            (
                "Panchakarma".to_string(),
                vec![
                    profile("D101", "Dr. Ananya Iyer", "Panchakarma Specialist", 12, 4.9, "+91 98000 11111"),
                    profile("D102", "Dr. Rohan Deshmukh", "Detox & Rejuvenation", 10, 4.8, "+91 98000 22222"),
                    profile("D103", "Dr. Meera Patel", "Ayurvedic Physician", 9, 4.7, "+91 98000 33333"),
                ],
            ),
            (
                "Abhyanga".to_string(),
                vec![
                    profile("D201", "Dr. Kavya Nair", "Therapeutic Massage", 8, 4.8, "+91 98111 11111"),
                    profile("D202", "Dr. Arjun Rao", "Musculoskeletal Care", 11, 4.7, "+91 98111 22222"),
                    profile("D203", "Dr. Sneha Kulkarni", "Pain Management", 7, 4.6, "+91 98111 33333"),
                ],
            ),
            (
                "Shirodhara".to_string(),
                vec![
                    profile("D301", "Dr. Niharika Sharma", "Stress & Sleep Disorders", 10, 4.9, "+91 98222 11111"),
                    profile("D302", "Dr. Vivek Menon", "Neurological Wellness", 12, 4.8, "+91 98222 22222"),
                    profile("D303", "Dr. Priyanka Joshi", "Mind-Body Balance", 9, 4.7, "+91 98222 33333"),
                ],
            ),
            (
                "Udvartana".to_string(),
                vec![
                    profile("D401", "Dr. Sagar Pawar", "Metabolic Health", 8, 4.7, "+91 98333 11111"),
                    profile("D402", "Dr. Aishwarya G", "Weight Management", 10, 4.8, "+91 98333 22222"),
                    profile("D403", "Dr. Harshita Jain", "Skin & Detox", 6, 4.6, "+91 98333 33333"),
                ],
            ),
            (
                "Nasya".to_string(),
                vec![
                    profile("D501", "Dr. Ritu Kapoor", "ENT & Respiratory", 9, 4.7, "+91 98444 11111"),
                    profile("D502", "Dr. Aman Gupta", "Sinus & Allergy Care", 7, 4.6, "+91 98444 22222"),
                    profile("D503", "Dr. Neha Bansal", "Head & Neck Therapy", 8, 4.7, "+91 98444 33333"),
                ],
            ),
            (
                "Basti".to_string(),
                vec![
                    profile("D601", "Dr. Kiran Shetty", "Digestive Wellness", 11, 4.8, "+91 98555 11111"),
                    profile("D602", "Dr. Pooja Rao", "Gut Health & Detox", 10, 4.7, "+91 98555 22222"),
                    profile("D603", "Dr. Mahesh I", "Colon Therapy", 9, 4.6, "+91 98555 33333"),
                ],
            ),
        ];
        Self { pools }
    }

    /// Ordered pool for a treatment type; empty slice for unknown types.
    pub fn pool_for(&self, treatment_type: &str) -> &[PractitionerProfile] {
        self.pools
            .iter()
            .find(|(key, _)| key == treatment_type)
            .map(|(_, pool)| pool.as_slice())
            .unwrap_or(&[])
    }

    /// Every (treatment type, pool) pair in registration order.
    pub fn catalog(&self) -> impl Iterator<Item = (&str, &[PractitionerProfile])> {
        self.pools
            .iter()
            .map(|(key, pool)| (key.as_str(), pool.as_slice()))
    }

    /// Every pool member across all treatment types, in registration order.
    pub fn all_profiles(&self) -> impl Iterator<Item = &PractitionerProfile> {
        self.pools.iter().flat_map(|(_, pool)| pool.iter())
    }
}
