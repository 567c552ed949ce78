// src/services/matricula_service.rs
use crate::{
    error::ApiError,
    models::{
        matricula::{self, AlunoResumo, Matricula, MatriculaApi, MatriculaPayload, TurmaResumo},
        situacao::Situacao,
    },
    services::api_client::{metodo_e_caminho, ApiClient, Gravacao},
};

const MATRICULAS: &str = "/api/matriculas";

/// Tudo o que o ecrã de matrículas precisa, carregado de uma só vez.
#[derive(Debug, Clone, Default)]
pub struct DadosMatriculas {
    pub matriculas: Vec<Matricula>,
    pub alunos: Vec<AlunoResumo>,
    pub turmas: Vec<TurmaResumo>,
    pub situacoes: Vec<Situacao>,
}

pub async fn listar(api: &ApiClient) -> Result<Vec<Matricula>, ApiError> {
    let lista: Vec<MatriculaApi> = api.buscar(MATRICULAS).await?;
    Ok(lista.into_iter().map(Matricula::from).collect())
}

/// Os quatro pedidos correm em paralelo; só há resultado se todos terminarem bem,
/// para nunca mostrar um ecrã meio carregado.
pub async fn carregar_tudo(api: &ApiClient) -> Result<DadosMatriculas, ApiError> {
    let (matriculas, alunos, turmas, situacoes) = tokio::try_join!(
        listar(api),
        api.buscar::<Vec<AlunoResumo>>("/api/alunos"),
        api.buscar::<Vec<TurmaResumo>>("/api/turmas"),
        api.buscar::<Vec<Situacao>>("/api/matricula-situacoes"),
    )?;
    Ok(DadosMatriculas { matriculas, alunos, turmas, situacoes })
}

/// Mesmo que `carregar_tudo`, mas uma falha é registada e o ecrã fica vazio.
pub async fn carregar_ou_vazio(api: &ApiClient) -> DadosMatriculas {
    match carregar_tudo(api).await {
        Ok(dados) => dados,
        Err(e) => {
            tracing::error!("Falha ao carregar dados de matrículas: {}", e);
            DadosMatriculas::default()
        }
    }
}

/// Valida, grava e traduz a resposta. Se a validação falhar nenhum pedido é feito.
pub async fn submeter(api: &ApiClient, m: &Matricula) -> Result<Gravacao, String> {
    matricula::validar(m).map_err(|msg| {
        tracing::warn!("Matrícula rejeitada na validação: {}", msg);
        msg.to_string()
    })?;

    let payload = MatriculaPayload::from(m);
    let (metodo, caminho) = metodo_e_caminho(MATRICULAS, m.id);

    match api.enviar(metodo, &caminho, &payload).await {
        Ok(()) => {
            tracing::info!("Matrícula gravada (id {:?}).", m.id);
            Ok(Gravacao::de(m.id))
        }
        Err(ApiError::Status { status, corpo }) => {
            tracing::warn!("Erro ao salvar matrícula: HTTP {} {}", status, corpo);
            Err(matricula::mensagem_rejeicao(status).to_string())
        }
        Err(e) => {
            tracing::error!("Falha inesperada ao salvar matrícula: {}", e);
            Err("Erro inesperado ao salvar.".to_string())
        }
    }
}

pub async fn excluir(api: &ApiClient, id: i64) -> Result<(), String> {
    match api.excluir(&format!("{MATRICULAS}/{id}")).await {
        Ok(()) => {
            tracing::info!("Matrícula {} excluída.", id);
            Ok(())
        }
        Err(ApiError::Status { status, .. }) => {
            tracing::warn!("Backend recusou excluir matrícula {}: HTTP {}", id, status);
            Err("Erro ao excluir matrícula.".to_string())
        }
        Err(e) => {
            tracing::error!("Falha inesperada ao excluir matrícula {}: {}", id, e);
            Err("Erro inesperado ao excluir.".to_string())
        }
    }
}

pub fn mensagem_sucesso(gravacao: Gravacao) -> &'static str {
    match gravacao {
        Gravacao::Criado => "🎉 Matrícula criada!",
        Gravacao::Atualizado => "✅ Matrícula atualizada!",
    }
}

pub const MENSAGEM_EXCLUSAO: &str = "🗑️ Matrícula excluída.";
