// src/services/categoria_service.rs
use crate::{
    error::{AppError, AppResult},
    models::categoria::{Categoria, NovaCategoria},
};
use sqlx::SqlitePool;

pub async fn find_all_categorias(db_pool: &SqlitePool) -> AppResult<Vec<Categoria>> {
    tracing::debug!("Buscando todas as categorias...");
    let categorias = sqlx::query_as::<_, Categoria>("SELECT id, nome FROM categorias ORDER BY id ASC")
        .fetch_all(db_pool)
        .await?;
    Ok(categorias)
}

pub async fn find_categoria_by_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Categoria>> {
    let categoria = sqlx::query_as::<_, Categoria>("SELECT id, nome FROM categorias WHERE id = ?1")
        .bind(id)
        .fetch_optional(db_pool)
        .await?;
    Ok(categoria)
}

pub async fn get_categoria(db_pool: &SqlitePool, id: i64) -> AppResult<Categoria> {
    find_categoria_by_id(db_pool, id)
        .await?
        .ok_or(AppError::NotFound { entidade: "Categoria", id })
}

/// Primeira categoria cujo nome coincide, sem distinguir maiúsculas.
/// A comparação é feita em Rust porque o `lower()` do SQLite só trata ASCII.
pub async fn find_categoria_by_nome(db_pool: &SqlitePool, nome: &str) -> AppResult<Option<Categoria>> {
    let alvo = nome.to_lowercase();
    let categoria = find_all_categorias(db_pool)
        .await?
        .into_iter()
        .find(|c| c.nome.to_lowercase() == alvo);
    Ok(categoria)
}

pub async fn count_categorias(db_pool: &SqlitePool) -> AppResult<i64> {
    let total = sqlx::query_scalar("SELECT COUNT(*) FROM categorias")
        .fetch_one(db_pool)
        .await?;
    Ok(total)
}

pub async fn create_categoria(db_pool: &SqlitePool, nova: &NovaCategoria) -> AppResult<Categoria> {
    let categoria = sqlx::query_as::<_, Categoria>(
        "INSERT INTO categorias (nome) VALUES (?1) RETURNING id, nome",
    )
    .bind(&nova.nome)
    .fetch_one(db_pool)
    .await?;
    tracing::info!("✅ Categoria '{}' criada com id {}.", categoria.nome, categoria.id);
    Ok(categoria)
}

pub async fn update_categoria(
    db_pool: &SqlitePool,
    id: i64,
    dados: &NovaCategoria,
) -> AppResult<Categoria> {
    sqlx::query_as::<_, Categoria>(
        "UPDATE categorias SET nome = ?1 WHERE id = ?2 RETURNING id, nome",
    )
    .bind(&dados.nome)
    .bind(id)
    .fetch_optional(db_pool)
    .await?
    .ok_or(AppError::NotFound { entidade: "Categoria", id })
}

pub async fn delete_categoria(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    let rows_affected = sqlx::query("DELETE FROM categorias WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| AppError::from_sqlx_fk(e, "A categoria ainda tem cursos associados."))?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound { entidade: "Categoria", id });
    }
    tracing::info!("🗑️ Categoria {} removida.", id);
    Ok(())
}
