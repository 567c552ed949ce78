// src/models/matricula.rs
use crate::models::{
    chave_ordenacao, contem,
    datas::{self, DataBr, DataIso},
    igual_ou_vazio, situacao, Referencia, Registro, TextoOuNumero,
};
use crate::models::situacao::Situacao;
use serde::{Deserialize, Serialize};

/// Aluno tal como aparece no ecrã de matrículas (só o necessário para o dropdown).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlunoResumo {
    pub id: i64,
    pub nome: String,
    /// Preenchido pelo backend quando o aluno já tem matrícula.
    #[serde(default)]
    pub matricula: Option<TextoOuNumero>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurmaResumo {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub maximo_alunos: Option<i64>,
}

impl AlunoResumo {
    /// Só o id, quando o aluno escolhido não está na lista carregada.
    pub fn so_id(id: i64) -> Self {
        AlunoResumo { id, nome: String::new(), matricula: None }
    }
}

impl TurmaResumo {
    pub fn so_id(id: i64) -> Self {
        TurmaResumo { id, nome: String::new(), maximo_alunos: None }
    }
}

/// Matrícula como o backend a entrega.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatriculaApi {
    pub id: i64,
    pub aluno: Option<AlunoResumo>,
    pub turma: Option<TurmaResumo>,
    pub situacao: Option<Situacao>,
    #[serde(default)]
    pub data_matricula: Option<DataIso>,
    #[serde(default)]
    pub inicio: Option<DataIso>,
    #[serde(default)]
    pub termino: Option<DataIso>,
    #[serde(default)]
    pub observacoes: Option<String>,
}

/// Matrícula como o ecrã a usa (datas em dd/mm/aaaa).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matricula {
    pub id: Option<i64>,
    pub aluno: Option<AlunoResumo>,
    pub turma: Option<TurmaResumo>,
    pub situacao: Option<Situacao>,
    pub data_matricula: DataBr,
    pub inicio: DataBr,
    pub termino: DataBr,
    pub observacoes: String,
}

impl From<MatriculaApi> for Matricula {
    fn from(m: MatriculaApi) -> Self {
        Matricula {
            id: Some(m.id),
            aluno: m.aluno,
            turma: m.turma,
            situacao: m.situacao,
            data_matricula: datas::exibir(m.data_matricula.as_ref()),
            inicio: datas::exibir(m.inicio.as_ref()),
            termino: datas::exibir(m.termino.as_ref()),
            observacoes: m.observacoes.unwrap_or_default(),
        }
    }
}

impl Registro for Matricula {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Matricula {
    /// Rascunho em branco; a situação começa em "ativa" quando existe.
    pub fn nova(situacoes: &[Situacao]) -> Self {
        Matricula {
            situacao: situacao::por_descricao(situacoes, "ativa"),
            ..Matricula::default()
        }
    }

    pub fn nome_aluno(&self) -> &str {
        self.aluno.as_ref().map(|a| a.nome.as_str()).unwrap_or("")
    }

    pub fn nome_turma(&self) -> &str {
        self.turma.as_ref().map(|t| t.nome.as_str()).unwrap_or("")
    }

    pub fn descricao_situacao(&self) -> &str {
        self.situacao.as_ref().map(|s| s.descricao.as_str()).unwrap_or("")
    }
}

/// Corpo do POST/PUT: entidades relacionadas só por id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatriculaPayload {
    pub aluno: Option<Referencia>,
    pub turma: Option<Referencia>,
    pub situacao: Option<Referencia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_matricula: Option<DataIso>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inicio: Option<DataIso>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termino: Option<DataIso>,
    pub observacoes: String,
}

impl From<&Matricula> for MatriculaPayload {
    fn from(m: &Matricula) -> Self {
        MatriculaPayload {
            aluno: m.aluno.as_ref().map(|a| Referencia { id: a.id }),
            turma: m.turma.as_ref().map(|t| Referencia { id: t.id }),
            situacao: m.situacao.as_ref().map(|s| Referencia { id: s.id }),
            data_matricula: m.data_matricula.para_iso(),
            inicio: m.inicio.para_iso(),
            termino: m.termino.para_iso(),
            observacoes: m.observacoes.clone(),
        }
    }
}

/// Campos enviados pelo formulário do modal (todos como texto).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatriculaForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub aluno_id: String,
    #[serde(default)]
    pub turma_id: String,
    #[serde(default)]
    pub situacao_id: String,
    #[serde(default)]
    pub data_matricula: String,
    #[serde(default)]
    pub inicio: String,
    #[serde(default)]
    pub termino: String,
    #[serde(default)]
    pub observacoes: String,
}

fn id_do_form(valor: &str) -> Option<i64> {
    valor.trim().parse().ok()
}

impl MatriculaForm {
    /// Reconstrói o rascunho a partir do formulário, completando os ids com as listas
    /// carregadas. Um id que não está nas listas (lista vazia por falha de carga)
    /// continua selecionado: o payload só precisa do id.
    pub fn rascunho(
        &self,
        alunos: &[AlunoResumo],
        turmas: &[TurmaResumo],
        situacoes: &[Situacao],
    ) -> Matricula {
        let aluno_id = id_do_form(&self.aluno_id);
        let turma_id = id_do_form(&self.turma_id);
        Matricula {
            id: id_do_form(&self.id),
            aluno: aluno_id.map(|id| {
                alunos
                    .iter()
                    .find(|a| a.id == id)
                    .cloned()
                    .unwrap_or_else(|| AlunoResumo::so_id(id))
            }),
            turma: turma_id.map(|id| {
                turmas
                    .iter()
                    .find(|t| t.id == id)
                    .cloned()
                    .unwrap_or_else(|| TurmaResumo::so_id(id))
            }),
            situacao: id_do_form(&self.situacao_id).map(|id| {
                situacao::por_id(situacoes, Some(id)).unwrap_or_else(|| Situacao::so_id(id))
            }),
            data_matricula: DataBr::digitada(&self.data_matricula),
            inicio: DataBr::digitada(&self.inicio),
            termino: DataBr::digitada(&self.termino),
            observacoes: self.observacoes.clone(),
        }
    }
}

/// Validação local antes de qualquer chamada ao backend. A primeira falha é devolvida.
pub fn validar(m: &Matricula) -> Result<(), &'static str> {
    if m.aluno.is_none() {
        return Err("Selecione o aluno.");
    }
    if m.turma.is_none() {
        return Err("Selecione a turma.");
    }
    if !m.data_matricula.valida() {
        return Err("Informe uma Data da matrícula válida (dd/mm/aaaa).");
    }
    if !m.inicio.valida() {
        return Err("Informe uma data de Início válida (dd/mm/aaaa).");
    }
    if !m.termino.valida() {
        return Err("Informe uma data de Término válida (dd/mm/aaaa).");
    }
    Ok(())
}

/// Tradução dos códigos HTTP de rejeição de uma gravação de matrícula.
pub fn mensagem_rejeicao(status: u16) -> &'static str {
    match status {
        409 => "Aluno já possui matrícula ATIVA nesta turma.",
        422 => "Turma sem vagas.",
        _ => "Erro ao salvar matrícula.",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FiltroMatriculas {
    #[serde(default)]
    pub aluno: String,
    #[serde(default)]
    pub turma: String,
    #[serde(default)]
    pub situacao: String,
}

impl FiltroMatriculas {
    pub fn aceita(&self, m: &Matricula) -> bool {
        contem(m.nome_aluno(), &self.aluno)
            && contem(m.nome_turma(), &self.turma)
            && igual_ou_vazio(m.descricao_situacao(), &self.situacao)
    }

    pub fn aplicar<'a>(&self, matriculas: &'a [Matricula]) -> Vec<&'a Matricula> {
        matriculas.iter().filter(|m| self.aceita(m)).collect()
    }
}

/// Alunos que podem ser escolhidos: quem ainda não tem matrícula, mais o aluno
/// já ligado à matrícula em edição. Ordenados por nome.
pub fn alunos_disponiveis(alunos: &[AlunoResumo], selecionado: Option<i64>) -> Vec<&AlunoResumo> {
    let mut base: Vec<&AlunoResumo> = alunos
        .iter()
        .filter(|a| a.matricula.is_none() || Some(a.id) == selecionado)
        .collect();
    base.sort_by_key(|a| chave_ordenacao(&a.nome));
    base
}

pub fn turmas_ordenadas(turmas: &[TurmaResumo]) -> Vec<&TurmaResumo> {
    let mut ordenadas: Vec<&TurmaResumo> = turmas.iter().collect();
    ordenadas.sort_by_key(|t| chave_ordenacao(&t.nome));
    ordenadas
}
