//! The interactive read-eval-render loop.

use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use tracing::debug;

use homestock_core::ItemId;
use homestock_events::RecordingSink;
use homestock_inventory::{
    Category, DraftForm, EmptyState, Field, InventoryEvent, InventoryService, InventoryStore,
    ValidDraft,
};

use crate::command::{Command, HELP};
use crate::render;

const PROMPT: &str = "homestock> ";

type Service = InventoryService<RecordingSink<InventoryEvent>>;

/// One interactive session. Everything is dropped when it ends.
pub struct Session<R, W> {
    service: Service,
    search: String,
    input: R,
    output: W,
    styled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(store: InventoryStore, input: R, output: W) -> Self {
        Self {
            service: InventoryService::with_store(store, RecordingSink::new()),
            search: String::new(),
            input,
            output,
            styled: false,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Emit ANSI colors in tables.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Personal Inventory (type `help` for commands)")?;
        self.render_list()?;

        while let Some(line) = self.read_line(PROMPT)? {
            if line.trim().is_empty() {
                continue;
            }
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(error) => {
                    writeln!(self.output, "error: {error}")?;
                    continue;
                }
            };
            debug!(?command, "executing command");
            if self.execute(command)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> anyhow::Result<Flow> {
        match command {
            Command::List => self.render_list()?,
            Command::Search(term) => {
                self.search = term;
                self.render_list()?;
            }
            Command::Add => self.add()?,
            Command::Edit(prefix) => match self.resolve(&prefix) {
                Ok(id) => self.edit(id)?,
                Err(error) => writeln!(self.output, "error: {error}")?,
            },
            Command::Delete(prefix) => match self.resolve(&prefix) {
                Ok(id) => self.delete(id)?,
                Err(error) => writeln!(self.output, "error: {error}")?,
            },
            Command::Stats => {
                let stats = self.service.stats();
                writeln!(self.output, "{}", render::stats_line(&stats))?;
            }
            Command::Categories => {
                let stats = self.service.stats();
                if stats.categories.is_empty() {
                    writeln!(self.output, "No categories in use yet.")?;
                } else {
                    let table =
                        render::categories_table(self.service.list(), &stats, self.styled);
                    writeln!(self.output, "{table}")?;
                }
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Add New Item")?;
        let mut form = DraftForm::for_new();
        let Some(draft) = self.fill_form(&mut form)? else {
            return Ok(());
        };
        self.service.add_validated(draft);
        self.after_mutation()
    }

    fn edit(&mut self, id: ItemId) -> anyhow::Result<()> {
        let Some(item) = self.service.get(id) else {
            return Ok(());
        };
        writeln!(self.output, "Edit Item (press enter to keep a value)")?;
        let mut form = DraftForm::for_edit(item);
        let Some(draft) = self.fill_form(&mut form)? else {
            return Ok(());
        };
        self.service.update_validated(id, draft);
        self.after_mutation()
    }

    fn delete(&mut self, id: ItemId) -> anyhow::Result<()> {
        let Some(item) = self.service.get(id) else {
            return Ok(());
        };
        let question = format!("{} [y/N] ", item.delete_prompt());
        let confirmed = self
            .read_line(&question)?
            .is_some_and(|answer| matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"));
        if !confirmed {
            writeln!(self.output, "Cancelled.")?;
            return Ok(());
        }
        self.service.remove(id);
        self.after_mutation()
    }

    /// Prompt for every field, then only for fields that failed validation, until the
    /// draft is accepted. `None` if input ends first.
    fn fill_form(&mut self, form: &mut DraftForm) -> anyhow::Result<Option<ValidDraft>> {
        let keep_blank = form.editing().is_some();
        let mut pending = vec![
            Field::Name,
            Field::Quantity,
            Field::Category,
            Field::Location,
            Field::Description,
        ];

        loop {
            for field in pending {
                let label = field_label(form, field);
                let Some(answer) = self.read_line(&label)? else {
                    writeln!(self.output)?;
                    writeln!(self.output, "Cancelled.")?;
                    return Ok(None);
                };
                if keep_blank && answer.trim().is_empty() {
                    continue;
                }
                if keep_blank && field == Field::Description && answer.trim() == CLEAR {
                    form.set_description("");
                    continue;
                }
                apply_answer(form, field, &answer);
            }

            match form.submit() {
                Ok(draft) => return Ok(Some(draft)),
                Err(errors) => {
                    for (field, message) in errors.iter() {
                        writeln!(self.output, "  {field}: {message}")?;
                    }
                    pending = errors.fields().collect();
                }
            }
        }
    }

    fn after_mutation(&mut self) -> anyhow::Result<()> {
        for event in self.service.sink_mut().drain() {
            let note = event.notification();
            writeln!(self.output, "✔ {}: {}", note.title, note.description)?;
        }
        self.render_list()
    }

    fn render_list(&mut self) -> anyhow::Result<()> {
        let view = self.service.view(&self.search);
        let heading = if view.search.is_empty() {
            format!("Inventory Items ({})", view.shown())
        } else {
            format!(
                "Inventory Items ({}) matching {:?}",
                view.shown(),
                view.search.as_str()
            )
        };
        let body = match view.empty_state() {
            Some(empty) => format!("{}\n{}", EmptyState::TITLE, empty.hint()),
            None => render::items_table(&view.items, self.styled).to_string(),
        };
        let stats = render::stats_line(&view.stats);

        writeln!(self.output, "{stats}")?;
        writeln!(self.output, "{heading}")?;
        writeln!(self.output, "{body}")?;
        Ok(())
    }

    /// Resolve a full id, a unique prefix of one (hyphens optional), or a unique prefix
    /// of the short id shown in the list.
    fn resolve(&self, prefix: &str) -> anyhow::Result<ItemId> {
        let needle = prefix.trim().to_ascii_lowercase();
        if let Ok(id) = needle.parse::<ItemId>() {
            if self.service.get(id).is_some() {
                return Ok(id);
            }
        }
        let compact = needle.replace('-', "");
        let matches: Vec<ItemId> = self
            .service
            .list()
            .iter()
            .map(|item| item.id_typed())
            .filter(|id| {
                id.short().starts_with(&compact)
                    || id.as_uuid().simple().to_string().starts_with(&compact)
            })
            .collect();

        match matches.as_slice() {
            [id] => Ok(*id),
            [] => bail!("no item with id {prefix:?}"),
            _ => bail!("id {prefix:?} matches {} items; type more of it", matches.len()),
        }
    }

    fn read_line(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Answer that empties the description of an item being edited, where a blank answer
/// keeps the current value.
const CLEAR: &str = "-";

fn field_label(form: &DraftForm, field: Field) -> String {
    let draft = form.draft();
    let (name, current) = match field {
        Field::Name => ("Item Name *", draft.name.clone()),
        Field::Quantity => ("Quantity *", draft.quantity.to_string()),
        Field::Category => (
            "Category *",
            draft.category.map(|c| c.to_string()).unwrap_or_default(),
        ),
        Field::Location => ("Location *", draft.location.clone()),
        Field::Description => ("Description", draft.description.clone()),
    };

    let mut label = name.to_string();
    if field == Field::Category {
        let choices: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        label.push_str(&format!(" ({})", choices.join(", ")));
    }
    if form.editing().is_some() && !current.is_empty() {
        label.push_str(&format!(" [{current}]"));
        if field == Field::Description {
            label.push_str(&format!(" ({CLEAR} to clear)"));
        }
    }
    label.push_str(": ");
    label
}

fn apply_answer(form: &mut DraftForm, field: Field, answer: &str) {
    match field {
        Field::Name => form.set_name(answer),
        Field::Quantity => form.set_quantity_text(answer),
        Field::Category => form.set_category(parse_category(answer)),
        Field::Location => form.set_location(answer),
        Field::Description => form.set_description(answer),
    }
}

/// A category name, or its 1-based position in the list.
fn parse_category(answer: &str) -> Option<Category> {
    if let Ok(position) = answer.trim().parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|index| Category::ALL.get(index).copied());
    }
    answer.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(store: InventoryStore, script: &str) -> (String, Service) {
        let mut session = Session::new(store, script.as_bytes(), Vec::new());
        session.run().unwrap();
        let service = session.service().clone();
        let output = String::from_utf8(session.into_output()).unwrap();
        (output, service)
    }

    #[test]
    fn add_reprompts_only_invalid_fields() {
        let script = "add\n\n2\ntools\n\n\nDrill\nGarage\nquit\n";
        let (output, service) = run_script(InventoryStore::new(), script);

        assert_eq!(service.list().len(), 1);
        let item = &service.list()[0];
        assert_eq!(item.name(), "Drill");
        assert_eq!(item.quantity(), 2);
        assert_eq!(item.category(), Category::Tools);
        assert_eq!(item.location(), "Garage");
        assert!(output.contains("name: Item name is required"));
        assert!(output.contains("location: Location is required"));
        assert!(output.contains("✔ Item Added: Drill has been added to your inventory."));
        assert!(output.contains("Total Items: 1 | Categories: 1 | Total Quantity: 2"));
    }

    #[test]
    fn search_filters_the_rendered_list() {
        let (output, _) = run_script(
            InventoryStore::with_sample_items(),
            "search cabinet\nsearch zzz\n",
        );
        assert!(output.contains("Inventory Items (1) matching \"cabinet\""));
        assert!(output.contains("Try adjusting your search terms."));
    }

    #[test]
    fn empty_inventory_shows_getting_started_hint() {
        let (output, _) = run_script(InventoryStore::new(), "");
        assert!(output.contains("No items found"));
        assert!(output.contains("Start by adding your first inventory item."));
    }

    #[test]
    fn edit_keeps_blank_answers() {
        let store = InventoryStore::with_sample_items();
        let coffee = store.list()[1].id_typed().short();
        let script = format!("edit {coffee}\n\n3\n\nPantry\n\nquit\n");
        let (output, service) = run_script(store, &script);

        let item = &service.list()[1];
        assert_eq!(item.name(), "Coffee Beans");
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.category(), Category::Food);
        assert_eq!(item.location(), "Pantry");
        assert!(output.contains("Item Updated: Coffee Beans has been updated successfully."));
    }

    #[test]
    fn edit_can_clear_the_description() {
        let store = InventoryStore::with_sample_items();
        let coffee = store.list()[1].id_typed().short();
        let script = format!("edit {coffee}\n\n\n\n\n-\nquit\n");
        let (output, service) = run_script(store, &script);

        let item = &service.list()[1];
        assert_eq!(item.description(), "");
        assert_eq!(item.name(), "Coffee Beans");
        assert_eq!(item.quantity(), 5);
        assert_eq!(item.location(), "Kitchen Cabinet");
        assert!(output.contains("(- to clear)"));
    }

    #[test]
    fn edit_with_all_blank_answers_keeps_the_description() {
        let store = InventoryStore::with_sample_items();
        let before = store.list()[1].description().to_string();
        let coffee = store.list()[1].id_typed().short();
        let script = format!("edit {coffee}\n\n\n\n\n\nquit\n");
        let (_, service) = run_script(store, &script);

        assert_eq!(service.list()[1].description(), before);
    }

    #[test]
    fn delete_requires_confirmation() {
        let store = InventoryStore::with_sample_items();
        let jacket = store.list()[2].id_typed().to_string();
        let script = format!("delete {jacket}\nn\ndelete {jacket}\ny\n");
        let (output, service) = run_script(store, &script);

        assert!(output.contains("Are you sure you want to delete \"Winter Jacket\"?"));
        assert!(output.contains("Cancelled."));
        assert!(output.contains("Item Deleted: Winter Jacket has been removed from your inventory."));
        assert_eq!(service.list().len(), 2);
    }

    #[test]
    fn unknown_ids_and_commands_are_reported() {
        let (output, _) = run_script(InventoryStore::new(), "edit ffff\nwat\n");
        assert!(output.contains("error: no item with id \"ffff\""));
        assert!(output.contains("error: unknown command"));
    }

    #[test]
    fn end_of_input_cancels_a_form() {
        let (output, service) = run_script(InventoryStore::new(), "add\nDrill\n");
        assert!(output.contains("Cancelled."));
        assert!(service.list().is_empty());
    }

    #[test]
    fn categories_accept_list_positions() {
        assert_eq!(parse_category("1"), Some(Category::Electronics));
        assert_eq!(parse_category("10"), Some(Category::Other));
        assert_eq!(parse_category("0"), None);
        assert_eq!(parse_category("office"), Some(Category::Office));
        assert_eq!(parse_category("garden"), None);
    }
}
