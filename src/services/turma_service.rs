// src/services/turma_service.rs
use crate::{
    error::ApiError,
    models::turma::{self, Turma, TurmaApi, TurmaPayload},
    services::api_client::{metodo_e_caminho, ApiClient, Gravacao},
};

const TURMAS: &str = "/api/turmas";

pub async fn listar(api: &ApiClient) -> Result<Vec<Turma>, ApiError> {
    let lista: Vec<TurmaApi> = api.buscar(TURMAS).await?;
    Ok(lista.into_iter().map(Turma::from).collect())
}

pub async fn listar_ou_vazio(api: &ApiClient) -> Vec<Turma> {
    listar(api).await.unwrap_or_else(|e| {
        tracing::error!("Falha ao carregar turmas: {}", e);
        Vec::new()
    })
}

pub async fn submeter(api: &ApiClient, t: &Turma) -> Result<Gravacao, String> {
    turma::validar(t).map_err(|msg| {
        tracing::warn!("Turma rejeitada na validação: {}", msg);
        msg.to_string()
    })?;

    let (metodo, caminho) = metodo_e_caminho(TURMAS, t.id);
    match api.enviar(metodo, &caminho, &TurmaPayload::from(t)).await {
        Ok(()) => {
            tracing::info!("Turma '{}' gravada.", t.nome);
            Ok(Gravacao::de(t.id))
        }
        Err(e) => {
            tracing::error!("Erro ao salvar turma '{}': {}", t.nome, e);
            Err("Erro ao salvar turma.".to_string())
        }
    }
}

pub async fn excluir(api: &ApiClient, id: i64) -> Result<(), String> {
    api.excluir(&format!("{TURMAS}/{id}")).await.map_err(|e| {
        tracing::error!("Erro ao excluir turma {}: {}", id, e);
        "Erro ao excluir turma.".to_string()
    })?;
    tracing::info!("Turma {} excluída.", id);
    Ok(())
}

pub fn mensagem_sucesso(gravacao: Gravacao) -> &'static str {
    match gravacao {
        Gravacao::Criado => "🎉 Turma criada com sucesso!",
        Gravacao::Atualizado => "✅ Turma atualizada com sucesso!",
    }
}

pub const MENSAGEM_EXCLUSAO: &str = "🗑️ Turma excluída com sucesso!";
