//! Default contractor set used when no slot has been persisted yet.

use roster_types::contractor::{Contractor, ContractorId};

/// (id, name, contact number, address, remarks). Serials follow list order.
const SEED: &[(i64, &str, &str, &str, &str)] = &[
    (1, "Farooq Ahmed", "+880 17 1128 4718", "", "Piling work Ref Eng Mostafiz, Codda"),
    (2, "Pintu Contactor", "+880 16 7435 1165", "Cantonment", "PCO work"),
    (3, "Eng Sonjoy Spectra", "+880 17 1598 8470", "Spectra", ""),
    (4, "Eng Hanif Ref Hasan Bashundhara", "+880 17 1478 9240", "", ""),
    (5, "Eng Haroon CC 90", "+880 18 1938 1120", "", ""),
    (6, "Shakil Rahman", "+880 17 2254 8901", "Dhanmondi", "Electrical work specialist"),
    (7, "Md. Karim Builder", "+880 19 1567 3421", "Uttara", "Foundation work"),
    (8, "Rahman Construction", "+880 16 8899 4567", "Gulshan", "Steel structure work"),
    (9, "Nasir Ahmed", "+880 17 5566 7788", "Mirpur", "Roofing specialist"),
    (10, "Elite Builders", "+880 18 9988 7766", "Banani", "Complete construction"),
    (11, "Sumon Contractor", "+880 17 4433 2211", "Mohammadpur", "Plumbing work"),
    (12, "Green Construction", "+880 19 6677 8899", "Bashundhara", "Eco-friendly construction"),
    (13, "Alam Builders", "+880 16 5544 3322", "Tejgaon", "Commercial buildings"),
    (14, "Modern Tech", "+880 17 7788 9900", "Wari", "Smart home systems"),
    (15, "Rapid Construction", "+880 18 1122 3344", "Ramna", "Fast completion projects"),
    (16, "SafeBuild Ltd", "+880 19 9900 1122", "New Market", "Safety compliance specialist"),
    (17, "Urban Developers", "+880 17 3344 5566", "Panthapath", "Urban planning projects"),
    (18, "Quality Works", "+880 16 7766 5544", "Lalmatia", "Quality assurance"),
    (19, "Pro Builders", "+880 18 2233 4455", "Farmgate", "Professional construction"),
    (20, "Innovative Construct", "+880 19 5566 7788", "Shantinagar", "Innovative building solutions"),
    (21, "Reliable Contractors", "+880 17 8899 0011", "Malibagh", "Reliable service provider"),
    (22, "Express Builders", "+880 16 1122 3344", "Segunbagicha", "Express delivery projects"),
    (23, "Smart Solutions", "+880 18 4455 6677", "Eskaton", "Technology integrated construction"),
    (24, "Premier Construction", "+880 19 7788 9900", "Bailey Road", "Premium quality work"),
];

/// The seed dataset with serials `1..=24` in list order.
pub fn seed_contractors() -> Vec<Contractor> {
    SEED.iter()
        .enumerate()
        .map(|(index, &(id, name, contact_number, address, remarks))| Contractor {
            id: ContractorId(id),
            serial: index as u32 + 1,
            name: name.to_string(),
            contact_number: contact_number.to_string(),
            address: address.to_string(),
            remarks: remarks.to_string(),
        })
        .collect()
}
