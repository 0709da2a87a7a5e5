// src/services/professor_service.rs
use crate::{
    error::{AppError, AppResult},
    models::professor::{NovoProfessor, Professor},
};
use sqlx::SqlitePool;

pub async fn find_all_professores(db_pool: &SqlitePool) -> AppResult<Vec<Professor>> {
    tracing::debug!("Buscando todos os professores...");
    let professores = sqlx::query_as::<_, Professor>(
        "SELECT id, nome, email, imagem FROM professores ORDER BY id ASC",
    )
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("Encontrados {} professores.", professores.len());
    Ok(professores)
}

pub async fn find_professor_by_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Professor>> {
    let professor = sqlx::query_as::<_, Professor>(
        "SELECT id, nome, email, imagem FROM professores WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;
    Ok(professor)
}

/// Como `find_professor_by_id`, mas a ausência é `AppError::NotFound`.
pub async fn get_professor(db_pool: &SqlitePool, id: i64) -> AppResult<Professor> {
    find_professor_by_id(db_pool, id)
        .await?
        .ok_or(AppError::NotFound { entidade: "Professor", id })
}

pub async fn count_professores(db_pool: &SqlitePool) -> AppResult<i64> {
    let total = sqlx::query_scalar("SELECT COUNT(*) FROM professores")
        .fetch_one(db_pool)
        .await?;
    Ok(total)
}

pub async fn create_professor(db_pool: &SqlitePool, novo: &NovoProfessor) -> AppResult<Professor> {
    let professor = sqlx::query_as::<_, Professor>(
        r#"
        INSERT INTO professores (nome, email, imagem)
        VALUES (?1, ?2, ?3)
        RETURNING id, nome, email, imagem
        "#,
    )
    .bind(&novo.nome)
    .bind(&novo.email)
    .bind(novo.imagem.as_deref())
    .fetch_one(db_pool)
    .await?;
    tracing::info!("✅ Professor '{}' criado com id {}.", professor.nome, professor.id);
    Ok(professor)
}

pub async fn update_professor(
    db_pool: &SqlitePool,
    id: i64,
    dados: &NovoProfessor,
) -> AppResult<Professor> {
    let professor = sqlx::query_as::<_, Professor>(
        r#"
        UPDATE professores SET nome = ?1, email = ?2, imagem = ?3
        WHERE id = ?4
        RETURNING id, nome, email, imagem
        "#,
    )
    .bind(&dados.nome)
    .bind(&dados.email)
    .bind(dados.imagem.as_deref())
    .bind(id)
    .fetch_optional(db_pool)
    .await?;

    match professor {
        Some(p) => {
            tracing::info!("✅ Professor {} atualizado.", id);
            Ok(p)
        }
        None => {
            tracing::warn!("Falha ao atualizar: professor {} não encontrado.", id);
            Err(AppError::NotFound { entidade: "Professor", id })
        }
    }
}

/// Remove um professor. Falha com `ConflitoReferencial` se ainda houver cursos dele.
pub async fn delete_professor(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    let rows_affected = sqlx::query("DELETE FROM professores WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| {
            AppError::from_sqlx_fk(e, "O professor ainda tem cursos associados.")
        })?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound { entidade: "Professor", id });
    }
    tracing::info!("🗑️ Professor {} removido.", id);
    Ok(())
}
