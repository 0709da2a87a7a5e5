// src/services/curso_service.rs
use crate::{
    error::{AppError, AppResult},
    models::curso::{Curso, CursoDetalhe, NovoCurso},
};
use sqlx::SqlitePool;

const SELECT_DETALHE: &str = r#"
    SELECT c.id, c.nome, c.descricao, c.data_inicio, c.data_final, c.imagem,
           c.professor_id, c.categoria_id,
           p.nome AS professor_nome, cat.nome AS categoria_nome
    FROM cursos c
    JOIN professores p ON p.id = c.professor_id
    JOIN categorias cat ON cat.id = c.categoria_id
"#;

const MSG_REFERENCIA: &str = "Professor ou categoria inexistente.";

pub async fn find_all_cursos(db_pool: &SqlitePool) -> AppResult<Vec<CursoDetalhe>> {
    tracing::debug!("Buscando todos os cursos...");
    let cursos = sqlx::query_as::<_, CursoDetalhe>(&format!("{SELECT_DETALHE} ORDER BY c.id ASC"))
        .fetch_all(db_pool)
        .await?;
    Ok(cursos)
}

pub async fn find_cursos_by_categoria(
    db_pool: &SqlitePool,
    categoria_id: i64,
) -> AppResult<Vec<CursoDetalhe>> {
    tracing::debug!("Buscando cursos da categoria {}", categoria_id);
    let cursos = sqlx::query_as::<_, CursoDetalhe>(&format!(
        "{SELECT_DETALHE} WHERE c.categoria_id = ?1 ORDER BY c.id ASC"
    ))
    .bind(categoria_id)
    .fetch_all(db_pool)
    .await?;
    Ok(cursos)
}

pub async fn find_cursos_by_professor(
    db_pool: &SqlitePool,
    professor_id: i64,
) -> AppResult<Vec<CursoDetalhe>> {
    tracing::debug!("Buscando cursos do professor {}", professor_id);
    let cursos = sqlx::query_as::<_, CursoDetalhe>(&format!(
        "{SELECT_DETALHE} WHERE c.professor_id = ?1 ORDER BY c.id ASC"
    ))
    .bind(professor_id)
    .fetch_all(db_pool)
    .await?;
    Ok(cursos)
}

/// Padrão `LIKE` que deixa passar todos os nomes que contêm `trecho`.
/// O `LIKE` do SQLite só ignora maiúsculas em ASCII, por isso cada carácter
/// não-ASCII vira `_` e a comparação exata fica para depois.
fn padrao_like(trecho: &str) -> String {
    let mut padrao = String::from("%");
    for c in trecho.chars() {
        match c {
            '%' | '_' | '\\' => {
                padrao.push('\\');
                padrao.push(c);
            }
            c if c.is_ascii() => padrao.push(c),
            _ => padrao.push('_'),
        }
    }
    padrao.push('%');
    padrao
}

/// Cursos cujo nome contém `trecho`, sem distinguir maiúsculas (incluindo acentuadas).
pub async fn find_cursos_by_nome(db_pool: &SqlitePool, trecho: &str) -> AppResult<Vec<CursoDetalhe>> {
    tracing::debug!("Buscando cursos com nome contendo {:?}", trecho);
    let candidatos = sqlx::query_as::<_, CursoDetalhe>(&format!(
        r"{SELECT_DETALHE} WHERE c.nome LIKE ?1 ESCAPE '\' ORDER BY c.id ASC"
    ))
    .bind(padrao_like(trecho))
    .fetch_all(db_pool)
    .await?;

    let trecho = trecho.to_lowercase();
    let cursos = candidatos
        .into_iter()
        .filter(|c| c.curso.nome.to_lowercase().contains(&trecho))
        .collect();
    Ok(cursos)
}

pub async fn find_curso_by_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Curso>> {
    let curso = sqlx::query_as::<_, Curso>(
        r#"
        SELECT id, nome, descricao, data_inicio, data_final, imagem, professor_id, categoria_id
        FROM cursos WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;
    Ok(curso)
}

pub async fn get_curso_detalhe(db_pool: &SqlitePool, id: i64) -> AppResult<CursoDetalhe> {
    sqlx::query_as::<_, CursoDetalhe>(&format!("{SELECT_DETALHE} WHERE c.id = ?1"))
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .ok_or(AppError::NotFound { entidade: "Curso", id })
}

pub async fn count_cursos(db_pool: &SqlitePool) -> AppResult<i64> {
    let total = sqlx::query_scalar("SELECT COUNT(*) FROM cursos")
        .fetch_one(db_pool)
        .await?;
    Ok(total)
}

/// Insere um curso. Professor e categoria não são verificados antes: a chave
/// estrangeira recusa ids inexistentes e isso vira `ConflitoReferencial`.
pub async fn create_curso(db_pool: &SqlitePool, novo: &NovoCurso) -> AppResult<Curso> {
    let id = sqlx::query(
        r#"
        INSERT INTO cursos (nome, descricao, data_inicio, data_final, imagem, professor_id, categoria_id)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(&novo.nome)
    .bind(novo.descricao.as_deref())
    .bind(novo.data_inicio)
    .bind(novo.data_final)
    .bind(novo.imagem.as_deref())
    .bind(novo.professor_id)
    .bind(novo.categoria_id)
    .execute(db_pool)
    .await
    .map_err(|e| AppError::from_sqlx_fk(e, MSG_REFERENCIA))?
    .last_insert_rowid();

    tracing::info!("✅ Curso '{}' criado com id {}.", novo.nome, id);
    Ok(curso_com_id(id, novo))
}

pub async fn update_curso(db_pool: &SqlitePool, id: i64, dados: &NovoCurso) -> AppResult<Curso> {
    let rows_affected = sqlx::query(
        r#"
        UPDATE cursos
        SET nome = ?1, descricao = ?2, data_inicio = ?3, data_final = ?4,
            imagem = ?5, professor_id = ?6, categoria_id = ?7
        WHERE id = ?8
        "#,
    )
    .bind(&dados.nome)
    .bind(dados.descricao.as_deref())
    .bind(dados.data_inicio)
    .bind(dados.data_final)
    .bind(dados.imagem.as_deref())
    .bind(dados.professor_id)
    .bind(dados.categoria_id)
    .bind(id)
    .execute(db_pool)
    .await
    .map_err(|e| AppError::from_sqlx_fk(e, MSG_REFERENCIA))?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao atualizar: curso {} não encontrado.", id);
        return Err(AppError::NotFound { entidade: "Curso", id });
    }
    tracing::info!("✅ Curso {} atualizado.", id);
    Ok(curso_com_id(id, dados))
}

pub async fn delete_curso(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    let rows_affected = sqlx::query("DELETE FROM cursos WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound { entidade: "Curso", id });
    }
    tracing::info!("🗑️ Curso {} removido.", id);
    Ok(())
}

fn curso_com_id(id: i64, dados: &NovoCurso) -> Curso {
    Curso {
        id,
        nome: dados.nome.clone(),
        descricao: dados.descricao.clone(),
        data_inicio: dados.data_inicio,
        data_final: dados.data_final,
        imagem: dados.imagem.clone(),
        professor_id: dados.professor_id,
        categoria_id: dados.categoria_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;
    use crate::models::{categoria::NovaCategoria, professor::NovoProfessor};
    use crate::services::{categoria_service, professor_service};
    use chrono::NaiveDate;

    struct Base {
        pool: SqlitePool,
        ana: i64,
        bruno: i64,
        prog: i64,
        design: i64,
    }

    async fn base() -> Base {
        let pool = create_test_pool().await;
        let mut ids = Vec::new();
        for (nome, email) in [("Ana Lima", "ana@if.com"), ("Bruno Souza", "bruno@if.com")] {
            let novo = NovoProfessor { nome: nome.into(), email: email.into(), imagem: None };
            ids.push(professor_service::create_professor(&pool, &novo).await.unwrap().id);
        }
        for nome in ["Programação", "Design"] {
            let nova = NovaCategoria { nome: nome.into() };
            ids.push(categoria_service::create_categoria(&pool, &nova).await.unwrap().id);
        }
        Base { pool, ana: ids[0], bruno: ids[1], prog: ids[2], design: ids[3] }
    }

    fn curso(nome: &str, professor_id: i64, categoria_id: i64) -> NovoCurso {
        NovoCurso {
            nome: nome.into(),
            descricao: Some("Descrição longa do curso".into()),
            data_inicio: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            data_final: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            imagem: None,
            professor_id,
            categoria_id,
        }
    }

    #[tokio::test]
    async fn create_then_find_round_trip() {
        let b = base().await;
        let novo = curso("Java Web", b.ana, b.prog);
        let criado = create_curso(&b.pool, &novo).await.unwrap();

        let lido = find_curso_by_id(&b.pool, criado.id).await.unwrap().unwrap();
        assert_eq!(lido, criado);
        assert_eq!(lido.nome, novo.nome);
        assert_eq!(lido.data_inicio, novo.data_inicio);
        assert_eq!(lido.data_final, novo.data_final);

        let detalhe = get_curso_detalhe(&b.pool, criado.id).await.unwrap();
        assert_eq!(detalhe.curso, criado);
        assert_eq!(detalhe.professor_nome, "Ana Lima");
        assert_eq!(detalhe.categoria_nome, "Programação");
    }

    #[tokio::test]
    async fn filter_by_categoria_returns_exact_subset() {
        let b = base().await;
        let java = create_curso(&b.pool, &curso("Java Web", b.ana, b.prog)).await.unwrap();
        let rust = create_curso(&b.pool, &curso("Rust", b.bruno, b.prog)).await.unwrap();
        create_curso(&b.pool, &curso("UX Básico", b.bruno, b.design)).await.unwrap();

        let ids: Vec<i64> = find_cursos_by_categoria(&b.pool, b.prog)
            .await
            .unwrap()
            .iter()
            .map(|c| c.curso.id)
            .collect();
        assert_eq!(ids, vec![java.id, rust.id]);
        assert_eq!(find_all_cursos(&b.pool).await.unwrap().len(), 3);
        assert!(find_cursos_by_categoria(&b.pool, 999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn filter_by_professor_and_nome() {
        let b = base().await;
        create_curso(&b.pool, &curso("Java Web", b.ana, b.prog)).await.unwrap();
        create_curso(&b.pool, &curso("UX Básico", b.bruno, b.design)).await.unwrap();
        create_curso(&b.pool, &curso("UX AVANÇADO", b.bruno, b.design)).await.unwrap();

        assert_eq!(find_cursos_by_professor(&b.pool, b.bruno).await.unwrap().len(), 2);

        let nomes: Vec<String> = find_cursos_by_nome(&b.pool, "ux")
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.curso.nome)
            .collect();
        assert_eq!(nomes, vec!["UX Básico", "UX AVANÇADO"]);
        assert_eq!(find_cursos_by_nome(&b.pool, "avançado").await.unwrap().len(), 1);
        assert_eq!(find_cursos_by_nome(&b.pool, "bÁSICO").await.unwrap().len(), 1);
        assert!(find_cursos_by_nome(&b.pool, "%").await.unwrap().is_empty());
        assert!(find_cursos_by_nome(&b.pool, "UX_").await.unwrap().is_empty());
    }

    #[test]
    fn like_pattern_escapes_wildcards_and_widens_accents() {
        assert_eq!(padrao_like("ux"), "%ux%");
        assert_eq!(padrao_like("50%_a"), r"%50\%\_a%");
        assert_eq!(padrao_like("avançado"), "%avan_ado%");
    }

    #[tokio::test]
    async fn unknown_professor_is_conflict_and_persists_nothing() {
        let b = base().await;
        let resultado = create_curso(&b.pool, &curso("Fantasma", 999, b.prog)).await;
        assert!(matches!(resultado, Err(AppError::ConflitoReferencial(_))));
        assert_eq!(count_cursos(&b.pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_missing_curso_is_not_found() {
        let b = base().await;
        let resultado = update_curso(&b.pool, 5, &curso("Nada", b.ana, b.prog)).await;
        assert!(matches!(resultado, Err(AppError::NotFound { entidade: "Curso", id: 5 })));
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let b = base().await;
        let criado = create_curso(&b.pool, &curso("Java Web", b.ana, b.prog)).await.unwrap();
        let mut dados = curso("UX Básico", b.bruno, b.design);
        dados.data_inicio = NaiveDate::from_ymd_opt(2027, 1, 10).unwrap();
        dados.descricao = None;
        dados.imagem = Some("https://picsum.photos/seed/ux/600/300".into());

        update_curso(&b.pool, criado.id, &dados).await.unwrap();
        let lido = find_curso_by_id(&b.pool, criado.id).await.unwrap().unwrap();
        assert_eq!(lido, curso_com_id(criado.id, &dados));

        let invalido = curso("UX Básico", b.bruno, 999);
        assert!(matches!(
            update_curso(&b.pool, criado.id, &invalido).await,
            Err(AppError::ConflitoReferencial(_))
        ));
    }

    #[tokio::test]
    async fn referenced_rows_cannot_be_deleted() {
        let b = base().await;
        let criado = create_curso(&b.pool, &curso("Java Web", b.ana, b.prog)).await.unwrap();

        assert!(matches!(
            professor_service::delete_professor(&b.pool, b.ana).await,
            Err(AppError::ConflitoReferencial(_))
        ));
        assert!(matches!(
            categoria_service::delete_categoria(&b.pool, b.prog).await,
            Err(AppError::ConflitoReferencial(_))
        ));
        assert!(professor_service::find_professor_by_id(&b.pool, b.ana).await.unwrap().is_some());
        assert!(categoria_service::find_categoria_by_id(&b.pool, b.prog).await.unwrap().is_some());

        delete_curso(&b.pool, criado.id).await.unwrap();
        professor_service::delete_professor(&b.pool, b.ana).await.unwrap();
        categoria_service::delete_categoria(&b.pool, b.prog).await.unwrap();
    }
}
