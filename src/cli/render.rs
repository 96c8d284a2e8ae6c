//! Text rendering for the interactive menu

use crate::query::PatientView;
use crate::record::Hospital;

pub const BANNER: &str = "\
=============================================
     WELCOME TO HOSPITAL MANAGEMENT SYSTEM
=============================================";

pub const AUTH_MENU: &str = "\n1. Login\n2. Sign Up\n3. Exit\nEnter choice: ";

pub const MAIN_MENU: &str = "\
\n--- Main Menu ---
1. Add Hospital Data
2. Display Hospital Data
3. Display Hospitals by City
4. Sort Hospitals by Bed Price
5. Sort Hospitals by Available Beds
6. Sort Hospitals by Name
7. Sort Hospitals by Rating and Reviews
8. Add Patient Data
9. Display Patient Data
10. Exit
Enter your choice: ";

pub fn hospital_row(h: &Hospital) -> String {
    format!(
        "ID: {} | Name: {} | City: {} | Beds: {} | Price: {:.2} | Rating: {:.1} | Reviews: {}",
        h.id, h.name, h.city, h.available_beds, h.bed_price, h.rating, h.reviews
    )
}

/// Row used under a per-city heading, where the city is implied
pub fn hospital_row_in_city(h: &Hospital) -> String {
    format!(
        "ID: {} | Name: {} | Beds: {} | Price: {:.2} | Rating: {:.1} | Reviews: {}",
        h.id, h.name, h.available_beds, h.bed_price, h.rating, h.reviews
    )
}

pub fn patient_row(view: &PatientView) -> String {
    let p = &view.patient;
    format!(
        "ID: {} | Name: {} | Age: {} | Disease: {} | Hospital: {}",
        p.id, p.name, p.age, p.disease, view.hospital_name
    )
}
