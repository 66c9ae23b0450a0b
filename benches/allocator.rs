use criterion::{Criterion, black_box, criterion_group, criterion_main};
use formgrid::logging::{LogEvent, LogSink};
use formgrid::{
    Field, FieldGroup, HorizontalDirection, LayoutEditor, LayoutEntry, LayoutStore, Logger,
    LoggingResult, VerticalDirection, normalize,
};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

const FORM_GROUP: &str = "bench.form";
const ARRAY_GROUP: &str = "bench.items";
const FIELD_COUNT: usize = 120;

fn sparse_entries() -> Vec<LayoutEntry> {
    (0..FIELD_COUNT)
        .map(|idx| {
            LayoutEntry::new(
                format!("f{idx}"),
                (idx as u32 / 3) * 7,
                (2 - idx as u32 % 3) * 5,
                4,
                12,
            )
        })
        .collect()
}

fn normalize_sparse(c: &mut Criterion) {
    let entries = sparse_entries();
    c.bench_function("normalize_sparse_120", |b| {
        b.iter(|| normalize(black_box(&entries)));
    });
}

fn build_editor() -> LayoutEditor {
    let mut store = LayoutStore::new();
    store.register_group(FieldGroup::new(FORM_GROUP));
    store.register_group(FieldGroup::array(ARRAY_GROUP));
    for idx in 0..FIELD_COUNT {
        store
            .register_field(Field::new(format!("f{idx}"), FORM_GROUP))
            .expect("form field");
    }
    for idx in 0..8 {
        store
            .register_field(Field::new(format!("col{idx}"), ARRAY_GROUP))
            .expect("array field");
    }

    let mut editor = LayoutEditor::new(store);
    let config = editor.config_mut();
    config.logger = Some(Logger::new(NullSink));
    config.validate_commits = false;
    config.enable_metrics();
    editor
}

fn editor_command_script(c: &mut Criterion) {
    let form = FORM_GROUP.to_string();
    let items = ARRAY_GROUP.to_string();
    c.bench_function("editor_command_script", |b| {
        b.iter(|| {
            let mut editor = build_editor();
            for idx in 0..FIELD_COUNT {
                editor.add_field(&format!("f{idx}"), &form);
            }
            for idx in 0..8 {
                editor.add_field(&format!("col{idx}"), &items);
            }
            for idx in (1..FIELD_COUNT).step_by(2) {
                editor.move_vertical(&format!("f{idx}"), VerticalDirection::Up, &form);
            }
            for idx in (1..FIELD_COUNT).step_by(4) {
                editor.move_horizontal(&format!("f{idx}"), HorizontalDirection::Left, &form);
            }
            for idx in (0..FIELD_COUNT).step_by(5) {
                editor.reposition(&format!("f{idx}"), &"f60".to_string());
            }
            black_box(editor.into_store());
        });
    });
}

criterion_group!(benches, normalize_sparse, editor_command_script);
criterion_main!(benches);
