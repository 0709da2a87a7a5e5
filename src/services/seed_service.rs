// src/services/seed_service.rs
//
// Dados de exemplo inseridos no arranque. Cada tipo de registo é semeado de
// forma independente: uma tabela com pelo menos uma linha é deixada como está.
use crate::{
    error::AppResult,
    models::{categoria::Categoria, professor::Professor},
    services::{categoria_service, curso_service, professor_service},
};
use chrono::{Days, Local, Months, NaiveDate};
use sqlx::SqlitePool;

const PROFESSORES: &[(&str, &str, &str)] = &[
    ("Ana Lima", "ana@if.com", "https://picsum.photos/seed/ana/200"),
    ("Bruno Souza", "bruno@if.com", "https://picsum.photos/seed/bruno/200"),
    ("Carla Dias", "carla@if.com", "https://picsum.photos/seed/carla/200"),
];

const CATEGORIAS: &[&str] = &["Programação", "Design", "Dados"];

/// Quantas linhas cada etapa inseriu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub professores: usize,
    pub categorias: usize,
    pub cursos: usize,
}

pub async fn run(db_pool: &SqlitePool) -> AppResult<SeedReport> {
    run_with_today(db_pool, Local::now().date_naive()).await
}

pub async fn run_with_today(db_pool: &SqlitePool, hoje: NaiveDate) -> AppResult<SeedReport> {
    tracing::info!("🌱 Verificando dados de exemplo...");
    let report = SeedReport {
        professores: seed_professores(db_pool).await?,
        categorias: seed_categorias(db_pool).await?,
        cursos: seed_cursos(db_pool, hoje).await?,
    };
    tracing::info!(
        "🌱 Seed concluído: {} professores, {} categorias, {} cursos inseridos.",
        report.professores,
        report.categorias,
        report.cursos
    );
    Ok(report)
}

async fn seed_professores(db_pool: &SqlitePool) -> AppResult<usize> {
    if professor_service::count_professores(db_pool).await? > 0 {
        tracing::debug!("Tabela professores já tem dados, seed ignorado.");
        return Ok(0);
    }

    let mut tx = db_pool.begin().await?;
    for (nome, email, imagem) in PROFESSORES {
        sqlx::query("INSERT INTO professores (nome, email, imagem) VALUES (?1, ?2, ?3)")
            .bind(*nome)
            .bind(*email)
            .bind(*imagem)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    Ok(PROFESSORES.len())
}

async fn seed_categorias(db_pool: &SqlitePool) -> AppResult<usize> {
    if categoria_service::count_categorias(db_pool).await? > 0 {
        tracing::debug!("Tabela categorias já tem dados, seed ignorado.");
        return Ok(0);
    }

    let mut tx = db_pool.begin().await?;
    for nome in CATEGORIAS {
        sqlx::query("INSERT INTO categorias (nome) VALUES (?1)")
            .bind(*nome)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    Ok(CATEGORIAS.len())
}

async fn seed_cursos(db_pool: &SqlitePool, hoje: NaiveDate) -> AppResult<usize> {
    if curso_service::count_cursos(db_pool).await? > 0 {
        tracing::debug!("Tabela cursos já tem dados, seed ignorado.");
        return Ok(0);
    }

    // Usa o que existir nas tabelas, mesmo que não sejam os registos semeados acima
    let professores: Vec<Professor> = professor_service::find_all_professores(db_pool).await?;
    let primeira: Option<Categoria> = categoria_service::find_all_categorias(db_pool)
        .await?
        .into_iter()
        .next();
    let prog = categoria_service::find_categoria_by_nome(db_pool, "Programação")
        .await?
        .or_else(|| primeira.clone());
    let design = categoria_service::find_categoria_by_nome(db_pool, "Design")
        .await?
        .or(primeira);

    let (Some(ana), Some(prog), Some(design)) = (professores.first(), prog, design) else {
        tracing::warn!("Sem professores ou categorias: seed de cursos ignorado.");
        return Ok(0);
    };
    let bruno = professores.get(1).unwrap_or(ana);

    let cursos = [
        (
            "Java Web",
            "Spring Boot + Thymeleaf + CRUD",
            hoje - Days::new(10),
            hoje + Months::new(2),
            "https://picsum.photos/seed/java/600/300",
            ana.id,
            prog.id,
        ),
        (
            "UX Básico",
            "Fundamentos de UX/UI e prototipação",
            hoje - Days::new(5),
            hoje + Months::new(1),
            "https://picsum.photos/seed/ux/600/300",
            bruno.id,
            design.id,
        ),
    ];

    let mut tx = db_pool.begin().await?;
    for (nome, descricao, inicio, fim, imagem, professor_id, categoria_id) in &cursos {
        sqlx::query(
            r#"
            INSERT INTO cursos (nome, descricao, data_inicio, data_final, imagem, professor_id, categoria_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(*nome)
        .bind(*descricao)
        .bind(*inicio)
        .bind(*fim)
        .bind(*imagem)
        .bind(*professor_id)
        .bind(*categoria_id)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    Ok(cursos.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;
    use crate::models::{categoria::NovaCategoria, professor::NovoProfessor};

    fn hoje() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[tokio::test]
    async fn seeds_empty_database() {
        let pool = create_test_pool().await;
        let report = run_with_today(&pool, hoje()).await.unwrap();
        assert_eq!(report, SeedReport { professores: 3, categorias: 3, cursos: 2 });

        let cursos = curso_service::find_all_cursos(&pool).await.unwrap();
        assert_eq!(cursos[0].curso.nome, "Java Web");
        assert_eq!(cursos[0].professor_nome, "Ana Lima");
        assert_eq!(cursos[0].categoria_nome, "Programação");
        assert_eq!(cursos[0].curso.data_inicio, NaiveDate::from_ymd_opt(2026, 10, 9).unwrap());
        assert_eq!(cursos[0].curso.data_final, NaiveDate::from_ymd_opt(2026, 12, 19).unwrap());
        assert_eq!(cursos[1].curso.nome, "UX Básico");
        assert_eq!(cursos[1].professor_nome, "Bruno Souza");
        assert_eq!(cursos[1].categoria_nome, "Design");
    }

    #[tokio::test]
    async fn running_twice_adds_nothing() {
        let pool = create_test_pool().await;
        run_with_today(&pool, hoje()).await.unwrap();
        let segundo = run_with_today(&pool, hoje()).await.unwrap();

        assert_eq!(segundo, SeedReport::default());
        assert_eq!(professor_service::count_professores(&pool).await.unwrap(), 3);
        assert_eq!(categoria_service::count_categorias(&pool).await.unwrap(), 3);
        assert_eq!(curso_service::count_cursos(&pool).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn courses_fall_back_to_existing_rows() {
        let pool = create_test_pool().await;
        let unico = professor_service::create_professor(
            &pool,
            &NovoProfessor { nome: "Zé".into(), email: "ze@if.com".into(), imagem: None },
        )
        .await
        .unwrap();
        let outra = categoria_service::create_categoria(&pool, &NovaCategoria { nome: "Gestão".into() })
            .await
            .unwrap();

        let report = run_with_today(&pool, hoje()).await.unwrap();
        assert_eq!(report, SeedReport { professores: 0, categorias: 0, cursos: 2 });

        for detalhe in curso_service::find_all_cursos(&pool).await.unwrap() {
            assert_eq!(detalhe.curso.professor_id, unico.id);
            assert_eq!(detalhe.curso.categoria_id, outra.id);
        }
    }
}
