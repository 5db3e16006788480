/// Cities offered by the client city selector.
pub const PAKISTAN_CITIES: &[&str] = &[
    "Karachi",
    "Lahore",
    "Faisalabad",
    "Rawalpindi",
    "Gujranwala",
    "Peshawar",
    "Multan",
    "Hyderabad",
    "Islamabad",
    "Quetta",
    "Bahawalpur",
    "Sargodha",
    "Sialkot",
    "Sukkur",
    "Larkana",
    "Sheikhupura",
    "Rahim Yar Khan",
    "Jhang",
    "Dera Ghazi Khan",
    "Gujrat",
    "Sahiwal",
    "Wah Cantonment",
    "Mardan",
    "Kasur",
    "Okara",
    "Mingora",
    "Nawabshah",
    "Chiniot",
    "Kotri",
    "Kamoke",
    "Hafizabad",
    "Sadiqabad",
    "Mirpur Khas",
    "Burewala",
    "Kohat",
    "Khanewal",
    "Dera Ismail Khan",
    "Turbat",
    "Muzaffargarh",
    "Abbottabad",
    "Mandi Bahauddin",
    "Shikarpur",
    "Jacobabad",
    "Jhelum",
    "Khanpur",
    "Khairpur",
    "Khuzdar",
    "Pakpattan",
    "Hub",
    "Daska",
    "Gojra",
    "Dadu",
    "Muridke",
    "Bahawalnagar",
    "Samundri",
    "Tando Allahyar",
    "Tando Adam",
    "Jaranwala",
    "Chishtian",
    "Muzaffarabad",
    "Attock",
    "Vehari",
    "Kot Abdul Malik",
    "Ferozwala",
    "Chakwal",
    "Gujranwala Cantonment",
    "Kamalia",
    "Umerkot",
    "Ahmedpur East",
    "Kot Addu",
    "Wazirabad",
    "Mansehra",
    "Layyah",
    "Mirpur",
    "Swabi",
    "Chaman",
    "Taxila",
    "Nowshera",
    "Khushab",
    "Shahdadkot",
    "Mianwali",
    "Kabal",
    "Lodhran",
    "Hasilpur",
    "Charsadda",
    "Bhakkar",
    "Badin",
    "Arif Wala",
    "Ghotki",
    "Sambrial",
    "Jatoi",
    "Haroonabad",
    "Daharki",
    "Narowal",
    "Tando Muhammad Khan",
    "Kamber Ali Khan",
    "Mirpur Mathelo",
    "Kandhkot",
    "Bhalwal",
    "Gilgit",
    "Skardu",
];

/// True if `name` is one of [`PAKISTAN_CITIES`] (exact match).
pub fn is_known_city(name: &str) -> bool {
    PAKISTAN_CITIES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn list_has_no_duplicates() {
        let unique: HashSet<_> = PAKISTAN_CITIES.iter().collect();
        assert_eq!(unique.len(), PAKISTAN_CITIES.len());
    }

    #[test]
    fn lookup_is_exact() {
        assert!(is_known_city("Lahore"));
        assert!(!is_known_city("lahore"));
        assert!(!is_known_city(""));
    }
}
