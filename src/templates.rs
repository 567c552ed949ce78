// src/templates.rs
use askama::Template;
use chrono::NaiveDate;

use crate::models::{
    aluno::{Aluno, FiltroAlunos},
    dashboard::Dashboard,
    datas,
    matricula::{self, FiltroMatriculas, Matricula},
    modal::EstadoModal,
    situacao::{self, Situacao},
    turma::{FiltroTurmas, Turma, SITUACOES_TURMA, TURNOS},
    Registro,
};
use crate::services::matricula_service::DadosMatriculas;

const VAZIO: &str = "—";

fn ou_traco(valor: &str) -> String {
    if valor.trim().is_empty() {
        VAZIO.to_string()
    } else {
        valor.to_string()
    }
}

/// Monta uma query string (`a=1&b=x`) ignorando valores vazios.
pub fn consulta(pares: &[(&str, &str)]) -> String {
    pares
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

// --- Peças reutilizadas pelos ecrãs ---

#[derive(Debug, Clone)]
pub struct OpcaoSelect {
    pub valor: String,
    pub rotulo: String,
    pub selecionado: bool,
}

impl OpcaoSelect {
    fn de_textos<'a>(textos: impl IntoIterator<Item = &'a str>, atual: &str) -> Vec<Self> {
        textos
            .into_iter()
            .map(|t| OpcaoSelect {
                valor: t.to_string(),
                rotulo: t.to_string(),
                selecionado: t == atual,
            })
            .collect()
    }
}

/// Um campo do formulário do modal. `tipo` decide o controlo HTML.
#[derive(Debug, Clone)]
pub struct Campo {
    pub nome: &'static str,
    pub rotulo: &'static str,
    pub valor: String,
    pub tipo: &'static str,
    pub opcoes: Vec<OpcaoSelect>,
    pub somente_leitura: bool,
}

impl Campo {
    fn novo(tipo: &'static str, nome: &'static str, rotulo: &'static str, valor: &str) -> Self {
        Campo {
            nome,
            rotulo,
            valor: valor.to_string(),
            tipo,
            opcoes: Vec::new(),
            somente_leitura: false,
        }
    }

    fn texto(nome: &'static str, rotulo: &'static str, valor: &str) -> Self {
        Self::novo("texto", nome, rotulo, valor)
    }

    fn data(nome: &'static str, rotulo: &'static str, valor: &str) -> Self {
        Self::novo("data", nome, rotulo, valor)
    }

    fn hora(nome: &'static str, rotulo: &'static str, valor: &str) -> Self {
        Self::novo("hora", nome, rotulo, valor)
    }

    fn selecao(nome: &'static str, rotulo: &'static str, opcoes: Vec<OpcaoSelect>) -> Self {
        Campo {
            opcoes,
            ..Self::novo("selecao", nome, rotulo, "")
        }
    }

    fn leitura(mut self) -> Self {
        self.somente_leitura = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Secao {
    pub titulo: &'static str,
    pub campos: Vec<Campo>,
}

/// O que cada ecrã coloca dentro do modal.
pub struct ConteudoModal {
    pub subtitulo: Option<String>,
    pub secoes: Vec<Secao>,
    pub pergunta_exclusao: String,
}

/// Rotas e filtros ativos de um ecrã, para gerar os links do modal.
pub struct Tela {
    pub base: &'static str,
    pub titulo_modal: &'static str,
    pub permite_excluir: bool,
    pub filtros_qs: String,
}

impl Tela {
    pub fn link(&self, extra: &str) -> String {
        let partes: Vec<&str> = [extra, self.filtros_qs.as_str()]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();
        if partes.is_empty() {
            self.base.to_string()
        } else {
            format!("{}?{}", self.base, partes.join("&"))
        }
    }

    /// Link que reproduz um estado de leitura (ou a lista, se o modal fecha).
    fn link_de<T: Registro>(&self, estado: &EstadoModal<T>) -> String {
        match estado {
            EstadoModal::Visualizando(r) => match r.id() {
                Some(id) => self.link(&format!("ver={id}")),
                None => self.link(""),
            },
            _ => self.link(""),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModalView {
    pub titulo: &'static str,
    pub editando: bool,
    pub confirmando: bool,
    pub erro: Option<String>,
    pub id: String,
    pub subtitulo: Option<String>,
    pub secoes: Vec<Secao>,
    pub pergunta_exclusao: String,
    pub pode_excluir: bool,
    pub acao_salvar: String,
    pub acao_excluir: String,
    pub link_editar: String,
    pub link_excluir: String,
    pub link_cancelar: String,
    pub link_fechar: String,
}

impl ModalView {
    pub fn de_estado<T: Registro + Clone>(
        estado: &EstadoModal<T>,
        tela: &Tela,
        montar: impl FnOnce(&T) -> ConteudoModal,
    ) -> Option<ModalView> {
        let registro = estado.registro()?;
        let id = registro.id();
        let id_texto = id.map(|i| i.to_string()).unwrap_or_default();
        let conteudo = montar(registro);
        Some(ModalView {
            titulo: tela.titulo_modal,
            editando: estado.em_edicao(),
            confirmando: estado.confirmando(),
            erro: estado.erro().map(str::to_string),
            subtitulo: conteudo.subtitulo,
            secoes: conteudo.secoes,
            pergunta_exclusao: conteudo.pergunta_exclusao,
            pode_excluir: tela.permite_excluir && id.is_some(),
            acao_salvar: format!("{}/salvar", tela.base),
            acao_excluir: format!("{}/{}/excluir", tela.base, id_texto),
            link_editar: tela.link(&format!("editar={id_texto}")),
            link_excluir: tela.link(&format!("excluir={id_texto}")),
            link_cancelar: tela.link_de(&estado.clone().cancelar()),
            link_fechar: tela.link(""),
            id: id_texto,
        })
    }
}

// --- Páginas ---

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub ativo: &'static str,
    pub sucesso: Option<String>,
}

impl HomePage {
    pub fn nova() -> Self {
        HomePage { ativo: "home", sucesso: None }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub ativo: &'static str,
    pub sucesso: Option<String>,
    pub dados: Option<Dashboard>,
    pub erro: Option<String>,
}

impl DashboardPage {
    pub fn nova(dados: Option<Dashboard>) -> Self {
        let erro = dados
            .is_none()
            .then(|| "Não foi possível carregar o dashboard.".to_string());
        DashboardPage { ativo: "dashboard", sucesso: None, dados, erro }
    }
}

// Alunos

pub struct LinhaAluno {
    pub id: String,
    pub nome: String,
    pub turma: String,
    pub responsavel: String,
    pub matricula: String,
    pub status: String,
    pub link_ver: String,
}

#[derive(Template)]
#[template(path = "alunos.html")]
pub struct AlunosPage {
    pub ativo: &'static str,
    pub sucesso: Option<String>,
    pub filtros: FiltroAlunos,
    pub status_filtro: Vec<OpcaoSelect>,
    pub linhas: Vec<LinhaAluno>,
    pub link_novo: String,
    pub modal: Option<ModalView>,
}

impl AlunosPage {
    pub fn montar(
        alunos: &[Aluno],
        status: &[Situacao],
        filtros: FiltroAlunos,
        estado: &EstadoModal<Aluno>,
        sucesso: Option<String>,
        hoje: NaiveDate,
    ) -> Self {
        let tela = Tela {
            base: "/alunos",
            titulo_modal: "🧾 Dados do Aluno",
            permite_excluir: false,
            filtros_qs: consulta(&[
                ("nome", &filtros.nome),
                ("turma", &filtros.turma),
                ("matricula", &filtros.matricula),
                ("status", &filtros.status),
            ]),
        };

        let linhas = filtros
            .aplicar(alunos)
            .into_iter()
            .map(|a| {
                let id = a.id.map(|i| i.to_string()).unwrap_or_default();
                LinhaAluno {
                    link_ver: tela.link(&format!("ver={id}")),
                    id,
                    nome: a.nome.clone(),
                    turma: a.turma.clone(),
                    responsavel: a.responsavel_pedagogico.clone(),
                    matricula: a.matricula.clone(),
                    status: ou_traco(a.descricao_status()),
                }
            })
            .collect();

        let status_filtro =
            OpcaoSelect::de_textos(status.iter().map(|s| s.descricao.as_str()), &filtros.status);

        let modal = ModalView::de_estado(estado, &tela, |a| campos_aluno(a, status, hoje));

        AlunosPage {
            ativo: "alunos",
            sucesso,
            link_novo: tela.link("novo=1"),
            filtros,
            status_filtro,
            linhas,
            modal,
        }
    }
}

fn campos_aluno(a: &Aluno, status: &[Situacao], hoje: NaiveDate) -> ConteudoModal {
    let status_atual = a.status.as_ref().map(|s| s.id);
    let opcoes_status = status
        .iter()
        .map(|s| OpcaoSelect {
            valor: s.id.to_string(),
            rotulo: s.descricao.clone(),
            selecionado: Some(s.id) == status_atual,
        })
        .collect();

    let mut info = vec![
        Campo::texto("nome", "Nome", &a.nome),
        Campo::data("data_nascimento", "Data de nascimento", a.data_nascimento.as_str()),
        Campo::texto("matricula", "Matrícula", &a.matricula).leitura(),
        Campo::selecao("status_id", "Status", opcoes_status),
    ];
    if let Some(criacao) = &a.data_criacao {
        info.push(Campo::texto("data_criacao", "Data de criação", criacao).leitura());
    }

    ConteudoModal {
        subtitulo: Some(format!(
            "{} · {}",
            ou_traco(&a.nome),
            datas::idade_descrita(&a.data_nascimento, hoje)
        )),
        secoes: vec![
            Secao { titulo: "Informações do Aluno", campos: info },
            Secao {
                titulo: "Acadêmico",
                campos: vec![
                    Campo::texto("turma", "Turma", &a.turma).leitura(),
                    Campo::texto("periodo", "Período", &a.periodo),
                    Campo::texto("ano", "Ano", &a.ano),
                    Campo::hora("horario_inicio", "Horário Início", &a.horario_inicio),
                    Campo::hora("horario_fim", "Horário Fim", &a.horario_fim),
                    Campo::texto("professora", "Professora", &a.professora),
                    Campo::texto("auxiliar", "Auxiliar", &a.auxiliar),
                ],
            },
            Secao {
                titulo: "Responsável Pedagógico",
                campos: vec![
                    Campo::texto("responsavel_pedagogico", "Nome", &a.responsavel_pedagogico),
                    Campo::texto("parentesco", "Parentesco", &a.parentesco),
                    Campo::novo("email", "email_responsavel", "E-mail", &a.email_responsavel),
                    Campo::texto("telefone1", "Telefone 1", &a.telefone1),
                    Campo::texto("telefone2", "Telefone 2", &a.telefone2),
                ],
            },
        ],
        pergunta_exclusao: String::new(),
    }
}

// Turmas

pub struct LinhaTurma {
    pub nome: String,
    pub nome_resumido: String,
    pub curso: String,
    pub periodo: String,
    pub situacao: String,
    pub turno: String,
    pub maximo_alunos: String,
    pub inicio: String,
    pub termino: String,
    pub link_ver: String,
}

#[derive(Template)]
#[template(path = "turmas.html")]
pub struct TurmasPage {
    pub ativo: &'static str,
    pub sucesso: Option<String>,
    pub filtros: FiltroTurmas,
    pub turnos_filtro: Vec<OpcaoSelect>,
    pub situacoes_filtro: Vec<OpcaoSelect>,
    pub linhas: Vec<LinhaTurma>,
    pub link_novo: String,
    pub modal: Option<ModalView>,
}

impl TurmasPage {
    pub fn montar(
        turmas: &[Turma],
        filtros: FiltroTurmas,
        estado: &EstadoModal<Turma>,
        sucesso: Option<String>,
    ) -> Self {
        let tela = Tela {
            base: "/turmas",
            titulo_modal: "🏫 Dados da Turma",
            permite_excluir: true,
            filtros_qs: consulta(&[
                ("nome", &filtros.nome),
                ("curso", &filtros.curso),
                ("turno", &filtros.turno),
                ("situacao", &filtros.situacao),
            ]),
        };

        let linhas = filtros
            .aplicar(turmas)
            .into_iter()
            .map(|t| LinhaTurma {
                link_ver: tela.link(&format!("ver={}", t.id.unwrap_or_default())),
                nome: t.nome.clone(),
                nome_resumido: ou_traco(&t.nome_resumido),
                curso: ou_traco(&t.curso),
                periodo: ou_traco(&t.periodo),
                situacao: ou_traco(&t.situacao),
                turno: ou_traco(&t.turno),
                maximo_alunos: t.maximo_alunos.map(|m| m.to_string()).unwrap_or_else(|| VAZIO.into()),
                inicio: ou_traco(t.inicio.as_str()),
                termino: ou_traco(t.termino.as_str()),
            })
            .collect();

        let modal = ModalView::de_estado(estado, &tela, campos_turma);

        TurmasPage {
            ativo: "turmas",
            sucesso,
            turnos_filtro: OpcaoSelect::de_textos(TURNOS.iter().copied(), &filtros.turno),
            situacoes_filtro: OpcaoSelect::de_textos(SITUACOES_TURMA.iter().copied(), &filtros.situacao),
            link_novo: tela.link("novo=1"),
            filtros,
            linhas,
            modal,
        }
    }
}

fn campos_turma(t: &Turma) -> ConteudoModal {
    let maximo = t.maximo_alunos.map(|m| m.to_string()).unwrap_or_default();
    ConteudoModal {
        subtitulo: None,
        secoes: vec![Secao {
            titulo: "",
            campos: vec![
                Campo::texto("nome", "Nome", &t.nome),
                Campo::texto("nome_resumido", "Nome Resumido", &t.nome_resumido),
                Campo::texto("curso", "Curso", &t.curso),
                Campo::texto("periodo", "Período", &t.periodo),
                Campo::selecao(
                    "situacao",
                    "Situação",
                    OpcaoSelect::de_textos(SITUACOES_TURMA.iter().copied(), &t.situacao),
                ),
                Campo::selecao("turno", "Turno", OpcaoSelect::de_textos(TURNOS.iter().copied(), &t.turno)),
                Campo::novo("numero", "maximo_alunos", "Máximo de alunos", &maximo),
                Campo::data("inicio", "Início", t.inicio.as_str()),
                Campo::data("termino", "Término", t.termino.as_str()),
                Campo::hora("horario_inicio", "Horário Início", &t.horario_inicio),
                Campo::hora("horario_fim", "Horário Fim", &t.horario_fim),
                Campo::texto("ano", "Ano", &t.ano),
                Campo::texto("professora", "Professora", &t.professora),
                Campo::texto("auxiliar", "Auxiliar", &t.auxiliar),
            ],
        }],
        pergunta_exclusao: format!("Excluir a turma {}?", ou_numero(&t.nome, t.id)),
    }
}

// Matrículas

pub struct LinhaMatricula {
    pub id: String,
    pub aluno: String,
    pub turma: String,
    pub situacao: String,
    pub data_matricula: String,
    pub inicio: String,
    pub termino: String,
    pub link_ver: String,
}

#[derive(Template)]
#[template(path = "matriculas.html")]
pub struct MatriculasPage {
    pub ativo: &'static str,
    pub sucesso: Option<String>,
    pub filtros: FiltroMatriculas,
    pub situacoes_filtro: Vec<OpcaoSelect>,
    pub linhas: Vec<LinhaMatricula>,
    pub link_novo: String,
    pub modal: Option<ModalView>,
}

impl MatriculasPage {
    pub fn montar(
        dados: &DadosMatriculas,
        filtros: FiltroMatriculas,
        estado: &EstadoModal<Matricula>,
        sucesso: Option<String>,
    ) -> Self {
        let tela = Tela {
            base: "/matriculas",
            titulo_modal: "🧾 Dados da Matrícula",
            permite_excluir: true,
            filtros_qs: consulta(&[
                ("aluno", &filtros.aluno),
                ("turma", &filtros.turma),
                ("situacao", &filtros.situacao),
            ]),
        };

        let linhas = filtros
            .aplicar(&dados.matriculas)
            .into_iter()
            .map(|m| {
                let id = m.id.map(|i| i.to_string()).unwrap_or_default();
                LinhaMatricula {
                    link_ver: tela.link(&format!("ver={id}")),
                    id,
                    aluno: m.nome_aluno().to_string(),
                    turma: m.nome_turma().to_string(),
                    situacao: m.descricao_situacao().to_string(),
                    data_matricula: ou_traco(m.data_matricula.as_str()),
                    inicio: ou_traco(m.inicio.as_str()),
                    termino: ou_traco(m.termino.as_str()),
                }
            })
            .collect();

        // O filtro de situação compara descrições em minúsculas.
        let filtro_sit = filtros.situacao.to_lowercase();
        let situacoes_filtro = situacao::ordenar_por_descricao(&dados.situacoes)
            .into_iter()
            .map(|s| OpcaoSelect {
                valor: s.descricao.to_lowercase(),
                rotulo: s.descricao.clone(),
                selecionado: s.descricao.to_lowercase() == filtro_sit,
            })
            .collect();

        let modal = ModalView::de_estado(estado, &tela, |m| campos_matricula(m, dados));

        MatriculasPage {
            ativo: "matriculas",
            sucesso,
            link_novo: tela.link("novo=1"),
            filtros,
            situacoes_filtro,
            linhas,
            modal,
        }
    }
}

/// Garante que o valor atual aparece no select mesmo quando não veio na lista
/// (lista vazia por falha de carga).
fn com_atual(mut opcoes: Vec<OpcaoSelect>, atual: Option<(i64, &str)>) -> Vec<OpcaoSelect> {
    if let Some((id, rotulo)) = atual {
        let valor = id.to_string();
        if !opcoes.iter().any(|o| o.valor == valor) {
            let rotulo = if rotulo.is_empty() { format!("#{id}") } else { rotulo.to_string() };
            opcoes.insert(0, OpcaoSelect { valor, rotulo, selecionado: true });
        }
    }
    opcoes
}

fn ou_numero(nome: &str, id: Option<i64>) -> String {
    match id {
        Some(id) if nome.is_empty() => format!("#{id}"),
        _ => nome.to_string(),
    }
}

fn campos_matricula(m: &Matricula, dados: &DadosMatriculas) -> ConteudoModal {
    let aluno_atual = m.aluno.as_ref().map(|a| a.id);
    let turma_atual = m.turma.as_ref().map(|t| t.id);
    let situacao_atual = m.situacao.as_ref().map(|s| s.id);

    let alunos = matricula::alunos_disponiveis(&dados.alunos, aluno_atual)
        .into_iter()
        .map(|a| OpcaoSelect {
            valor: a.id.to_string(),
            rotulo: a.nome.clone(),
            selecionado: Some(a.id) == aluno_atual,
        })
        .collect();
    let turmas = matricula::turmas_ordenadas(&dados.turmas)
        .into_iter()
        .map(|t| OpcaoSelect {
            valor: t.id.to_string(),
            rotulo: t.nome.clone(),
            selecionado: Some(t.id) == turma_atual,
        })
        .collect();
    let situacoes = situacao::ordenar_por_descricao(&dados.situacoes)
        .into_iter()
        .map(|s| OpcaoSelect {
            valor: s.id.to_string(),
            rotulo: s.descricao.clone(),
            selecionado: Some(s.id) == situacao_atual,
        })
        .collect();

    let alunos = com_atual(alunos, m.aluno.as_ref().map(|a| (a.id, a.nome.as_str())));
    let turmas = com_atual(turmas, m.turma.as_ref().map(|t| (t.id, t.nome.as_str())));
    let situacoes = com_atual(situacoes, m.situacao.as_ref().map(|s| (s.id, s.descricao.as_str())));

    let pergunta_exclusao = if m.aluno.is_none() && m.turma.is_none() {
        format!("Excluir a matrícula {}?", ou_numero("", m.id))
    } else {
        format!(
            "Excluir matrícula de {} na turma {}?",
            ou_numero(m.nome_aluno(), aluno_atual),
            ou_numero(m.nome_turma(), turma_atual)
        )
    };

    ConteudoModal {
        subtitulo: None,
        secoes: vec![Secao {
            titulo: "",
            campos: vec![
                Campo::selecao("aluno_id", "Aluno", alunos),
                Campo::selecao("turma_id", "Turma", turmas),
                Campo::selecao("situacao_id", "Situação", situacoes),
                Campo::data("data_matricula", "Data da matrícula", m.data_matricula.as_str()),
                Campo::data("inicio", "Início", m.inicio.as_str()),
                Campo::data("termino", "Término", m.termino.as_str()),
                Campo::novo("area", "observacoes", "Observações", &m.observacoes),
            ],
        }],
        pergunta_exclusao,
    }
}
