//! Role Descriptors
//!
//! The three dashboards share identical chrome; only the routes and the
//! logout endpoint differ. Each role binds those in one place so the
//! header component stays configuration-driven instead of copy-pasted
//! per role.

/// Dashboard role of the logged-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Patient,
    Practitioner,
    Secretary,
}

impl Role {
    /// Route of the role's dashboard ("Inicio").
    pub fn home_route(&self) -> &'static str {
        match self {
            Role::Patient => "/pacienteDashboard",
            Role::Practitioner => "/kinesiologoDashboard",
            Role::Secretary => "/secretariaDashboard",
        }
    }

    /// Route of the role's "Mis Datos" page.
    pub fn profile_route(&self) -> &'static str {
        match self {
            Role::Patient => "/datosPaciente",
            Role::Practitioner => "/datosKine",
            Role::Secretary => "/datosSecretaria",
        }
    }

    /// Backend endpoint that terminates this role's session.
    pub fn logout_endpoint(&self) -> &'static str {
        match self {
            Role::Patient => "/api/pacientes/logout",
            // TODO: the backend exposes no kinesiologo logout route yet,
            // so the practitioner header reuses the paciente one.
            Role::Practitioner => "/api/pacientes/logout",
            // TODO: confirm with the backend whether this path should
            // carry a leading slash; as deployed it resolves relative to
            // the current page.
            Role::Secretary => "api/secretarias/logout",
        }
    }

    /// Display name used in page headings.
    pub fn title(&self) -> &'static str {
        match self {
            Role::Patient => "Paciente",
            Role::Practitioner => "Kinesiólogo",
            Role::Secretary => "Secretaría",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Role; 3] = [Role::Patient, Role::Practitioner, Role::Secretary];

    #[test]
    fn test_home_and_profile_routes_are_distinct_per_role() {
        for role in ALL {
            assert_ne!(role.home_route(), role.profile_route());
        }
        let homes: Vec<_> = ALL.iter().map(|r| r.home_route()).collect();
        assert_eq!(homes.len(), 3);
        assert!(homes.iter().all(|h| homes.iter().filter(|o| o == &h).count() == 1));
    }

    #[test]
    fn test_patient_bindings() {
        assert_eq!(Role::Patient.home_route(), "/pacienteDashboard");
        assert_eq!(Role::Patient.profile_route(), "/datosPaciente");
        assert_eq!(Role::Patient.logout_endpoint(), "/api/pacientes/logout");
    }

    #[test]
    fn test_secretary_logout_endpoint_is_relative() {
        // Deployed without a leading slash; preserved until the backend
        // route is confirmed.
        assert_eq!(Role::Secretary.logout_endpoint(), "api/secretarias/logout");
    }
}
