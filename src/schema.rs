//! Remote schema reference for the `publicadores` table
//!
//! This layer performs no authorization itself; access control lives in the
//! row-level security policies below, enforced server-side against the
//! authenticated caller's role. The SQL here is what provisioning runs once
//! against the Supabase project, kept in the crate so the client and the
//! remote contract stay documented together.
//!
//! Roles come from the `usuarios` table: read is open to any authenticated
//! caller; insert and delete require `anciano`; update allows `anciano` or
//! `siervo`.

/// Table definition matching [`crate::model::Publicador`]
pub const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS publicadores (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    nombre TEXT NOT NULL,
    numero TEXT NOT NULL,
    grupo INTEGER NOT NULL,
    precursor BOOLEAN NOT NULL DEFAULT false,
    animo BOOLEAN NOT NULL DEFAULT false,
    creado_por UUID REFERENCES auth.users(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
"#;

/// Enable row-level security; without this the policies never apply
pub const ENABLE_RLS_SQL: &str = "ALTER TABLE publicadores ENABLE ROW LEVEL SECURITY;";

/// Read: any authenticated caller
pub const POLICY_SELECT_SQL: &str = r#"
CREATE POLICY "Usuarios autenticados pueden leer publicadores"
ON publicadores FOR SELECT
TO authenticated
USING (true);
"#;

/// Insert: `anciano` only
pub const POLICY_INSERT_SQL: &str = r#"
CREATE POLICY "Solo ancianos pueden crear publicadores"
ON publicadores FOR INSERT
TO authenticated
WITH CHECK (
  EXISTS (
    SELECT 1 FROM usuarios
    WHERE usuarios.id = auth.uid()
    AND usuarios.rol = 'anciano'
  )
);
"#;

/// Update: `anciano` or `siervo`
pub const POLICY_UPDATE_SQL: &str = r#"
CREATE POLICY "Ancianos y siervos pueden actualizar publicadores"
ON publicadores FOR UPDATE
TO authenticated
USING (
  EXISTS (
    SELECT 1 FROM usuarios
    WHERE usuarios.id = auth.uid()
    AND usuarios.rol IN ('anciano', 'siervo')
  )
);
"#;

/// Delete: `anciano` only
pub const POLICY_DELETE_SQL: &str = r#"
CREATE POLICY "Solo ancianos pueden eliminar publicadores"
ON publicadores FOR DELETE
TO authenticated
USING (
  EXISTS (
    SELECT 1 FROM usuarios
    WHERE usuarios.id = auth.uid()
    AND usuarios.rol = 'anciano'
  )
);
"#;

/// Full provisioning sequence in execution order
pub fn provisioning_statements() -> Vec<&'static str> {
    vec![
        CREATE_TABLE_SQL,
        ENABLE_RLS_SQL,
        POLICY_SELECT_SQL,
        POLICY_INSERT_SQL,
        POLICY_UPDATE_SQL,
        POLICY_DELETE_SQL,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provisioning_creates_table_before_policies() {
        let statements = provisioning_statements();
        assert_eq!(statements.len(), 6);
        assert!(statements[0].contains("CREATE TABLE"));
        assert!(statements[1].contains("ROW LEVEL SECURITY"));
        assert!(statements[2..].iter().all(|sql| sql.contains("CREATE POLICY")));
    }

    #[test]
    fn test_policies_cover_all_four_commands() {
        let statements = provisioning_statements().join("\n");
        for command in ["FOR SELECT", "FOR INSERT", "FOR UPDATE", "FOR DELETE"] {
            assert!(statements.contains(command), "missing policy {command}");
        }
    }
}
