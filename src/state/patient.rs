//! Patient Dashboard Model
//!
//! Wire types for the appointments endpoint plus the derived
//! pending/completed projection. Field names on the wire are the
//! backend's Spanish ones; identifiers here are not.

use serde::Deserialize;

/// Patient identity and full appointment list as returned by
/// `GET /api/pacientes/turnos`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Patient {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "turnos", default)]
    pub appointments: Vec<Appointment>,
}

impl Patient {
    /// Full display name for the dashboard greeting.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Drop the appointment with the given id, if present. Used after a
    /// confirmed cancellation; the partitions recompute from the list.
    pub fn remove_appointment(&mut self, id: i64) {
        self.appointments.retain(|a| a.id != id);
    }
}

/// One booked slot between the patient and a practitioner.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: i64,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "estado")]
    pub status: Status,
    #[serde(rename = "importeTotal", default)]
    pub total_amount: f64,
    #[serde(rename = "paciente", default)]
    pub patient_id: i64,
    #[serde(rename = "kinesiologo")]
    pub practitioner: Practitioner,
}

impl Appointment {
    /// Appointment date formatted for display, `dd/mm/yyyy`. Falls back
    /// to the raw wire value when the backend sends something unexpected.
    pub fn display_date(&self) -> String {
        format_date(&self.date)
    }
}

/// Practitioner summary embedded in each appointment.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Practitioner {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
}

impl Practitioner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Appointment lifecycle status as encoded by the backend.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum Status {
    #[serde(rename = "Activo")]
    Active,
    #[serde(rename = "Realizado")]
    Completed,
    /// Any other backend state. Excluded from both dashboard sections.
    #[serde(other)]
    Other,
}

/// Split appointments into the pending and completed views.
///
/// Pure projection over `status`: the two lists are disjoint and statuses
/// outside the two recognized values land in neither.
pub fn partition(appointments: &[Appointment]) -> (Vec<Appointment>, Vec<Appointment>) {
    let pending = appointments
        .iter()
        .filter(|a| a.status == Status::Active)
        .cloned()
        .collect();
    let completed = appointments
        .iter()
        .filter(|a| a.status == Status::Completed)
        .cloned()
        .collect();
    (pending, completed)
}

/// Format a backend date string as `dd/mm/yyyy`.
///
/// The backend serializes dates either as RFC 3339 timestamps or plain
/// `yyyy-mm-dd`; anything else is shown as received.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(id: i64, status: Status) -> Appointment {
        Appointment {
            id,
            date: "2026-08-06".to_string(),
            time: "10:00".to_string(),
            status,
            total_amount: 1500.0,
            patient_id: 7,
            practitioner: Practitioner {
                id: 3,
                first_name: "Laura".to_string(),
                last_name: "Pérez".to_string(),
            },
        }
    }

    #[test]
    fn test_partition_by_status() {
        let turnos = vec![
            appointment(1, Status::Active),
            appointment(2, Status::Completed),
            appointment(3, Status::Active),
        ];

        let (pending, completed) = partition(&turnos);

        assert_eq!(pending.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(completed.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_partition_excludes_unrecognized_statuses() {
        let turnos = vec![appointment(1, Status::Other), appointment(2, Status::Active)];

        let (pending, completed) = partition(&turnos);

        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, 2);
        assert!(completed.is_empty());
    }

    #[test]
    fn test_partition_sets_are_disjoint() {
        let turnos: Vec<_> = (0..6)
            .map(|i| {
                let status = match i % 3 {
                    0 => Status::Active,
                    1 => Status::Completed,
                    _ => Status::Other,
                };
                appointment(i, status)
            })
            .collect();

        let (pending, completed) = partition(&turnos);

        for a in &pending {
            assert!(completed.iter().all(|b| b.id != a.id));
        }
        assert!(pending.len() + completed.len() <= turnos.len());
    }

    #[test]
    fn test_deserialize_and_partition_backend_payload() {
        let payload = r#"{
            "nombre": "Ana",
            "apellido": "Gomez",
            "turnos": [
                {
                    "id": 1,
                    "fecha": "2026-08-10T00:00:00.000Z",
                    "hora": "09:30",
                    "estado": "Activo",
                    "importeTotal": 2000,
                    "paciente": 12,
                    "kinesiologo": {"id": 4, "nombre": "Juan", "apellido": "Suárez"}
                },
                {
                    "id": 2,
                    "fecha": "2026-07-01T00:00:00.000Z",
                    "hora": "11:00",
                    "estado": "Realizado",
                    "importeTotal": 2000,
                    "paciente": 12,
                    "kinesiologo": {"id": 4, "nombre": "Juan", "apellido": "Suárez"}
                }
            ]
        }"#;

        let patient: Patient = serde_json::from_str(payload).unwrap();
        assert_eq!(patient.full_name(), "Ana Gomez");

        let (pending, completed) = partition(&patient.appointments);
        assert_eq!(pending.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(completed.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_deserialize_unknown_status_lands_in_other() {
        let json = r#"{
            "id": 9,
            "fecha": "2026-08-10",
            "hora": "09:30",
            "estado": "Cancelado",
            "importeTotal": 0,
            "paciente": 12,
            "kinesiologo": {"id": 4, "nombre": "Juan", "apellido": "Suárez"}
        }"#;

        let turno: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(turno.status, Status::Other);
    }

    #[test]
    fn test_remove_appointment_touches_only_the_matching_id() {
        let mut patient = Patient {
            first_name: "Ana".to_string(),
            last_name: "Gomez".to_string(),
            appointments: vec![
                appointment(1, Status::Active),
                appointment(2, Status::Completed),
                appointment(3, Status::Active),
            ],
        };

        patient.remove_appointment(1);

        let (pending, completed) = partition(&patient.appointments);
        assert_eq!(pending.iter().map(|a| a.id).collect::<Vec<_>>(), vec![3]);
        assert_eq!(completed.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_remove_appointment_missing_id_is_a_noop() {
        let mut patient = Patient {
            first_name: "Ana".to_string(),
            last_name: "Gomez".to_string(),
            appointments: vec![appointment(1, Status::Active)],
        };

        patient.remove_appointment(99);
        assert_eq!(patient.appointments.len(), 1);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-08-10T00:00:00.000+00:00"), "10/08/2026");
        assert_eq!(format_date("2026-08-10T00:00:00.000Z"), "10/08/2026");
        assert_eq!(format_date("2026-08-10"), "10/08/2026");
        assert_eq!(format_date("mañana"), "mañana");
    }
}
