use clap::Parser;
use textiq::application::{
    copy_draft, copy_post, ComposeService, ConfigService, PostDraft, PostEdit, PostStore,
    VocabularyKind, VocabularyService,
};
use textiq::cli::{
    format_post_detail, format_post_list, format_vocabulary, Cli, Commands, FilmAction,
    HashtagAction, LabelAction,
};
use textiq::error::TextiqError;
use textiq::infrastructure::{CommandClipboard, DataDir, FileStore};

fn main() {
    textiq::logging::init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TextiqError> {
    let Some(command) = cli.command else {
        println!("textiq - Social media post template composer");
        println!("Use --help for usage information");
        return Ok(());
    };

    let data_dir = DataDir::discover()?;

    match command {
        Commands::New {
            title,
            film,
            label,
            tags,
            spacer,
            copy,
        } => {
            let mut store = open_store(&data_dir);
            let draft = PostDraft {
                title,
                film: film.unwrap_or_default(),
                label: label.unwrap_or_default(),
                hashtags: tags,
                spacer,
            };
            let post = ComposeService::new(&mut store).create(&draft)?;

            println!("Saved post {}", post.id.short());
            println!();
            println!("{}", post.formatted());

            if copy {
                let clipboard = clipboard_for(&data_dir)?;
                copy_post(&store, &post.id.to_string(), &clipboard)?;
                println!("Copied!");
            }
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            film,
            no_film,
            label,
            no_label,
            tags,
            add_tags,
            remove_tags,
            spacer,
        } => {
            let mut store = open_store(&data_dir);
            let edit = PostEdit {
                title,
                film: if no_film { Some(String::new()) } else { film },
                label: if no_label { Some(String::new()) } else { label },
                hashtags: if tags.is_empty() { None } else { Some(tags) },
                add_hashtags: add_tags,
                remove_hashtags: remove_tags,
                spacer,
            };
            let post = ComposeService::new(&mut store).edit(&id, &edit)?;

            println!("Updated post {}", post.id.short());
            println!();
            println!("{}", post.formatted());
            Ok(())
        }
        Commands::Delete { id } => {
            let mut store = open_store(&data_dir);
            let post = ComposeService::new(&mut store).delete(&id)?;
            println!("Deleted post {} ({})", post.id.short(), post.title);
            Ok(())
        }
        Commands::List { limit, label } => {
            let store = open_store(&data_dir);
            let config = data_dir.load_config()?;

            let posts: Vec<_> = store
                .posts()
                .iter()
                .filter(|p| label.as_ref().map_or(true, |l| &p.label == l))
                .take(limit.unwrap_or(usize::MAX))
                .cloned()
                .collect();

            print!("{}", format_post_list(&posts, config.hashtag_preview));
            if posts.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Show { id } => {
            let store = open_store(&data_dir);
            let post = store.find_by_prefix(&id)?;
            print!("{}", format_post_detail(post));
            Ok(())
        }
        Commands::Copy { id } => {
            let store = open_store(&data_dir);
            let clipboard = clipboard_for(&data_dir)?;
            copy_post(&store, &id, &clipboard)?;
            println!("Copied!");
            Ok(())
        }
        Commands::Preview {
            title,
            film,
            label,
            tags,
            spacer,
            copy,
        } => {
            let draft = PostDraft {
                title,
                film: film.unwrap_or_default(),
                label: label.unwrap_or_default(),
                hashtags: tags,
                spacer,
            };
            println!("{}", draft.preview());

            if copy {
                let clipboard = clipboard_for(&data_dir)?;
                copy_draft(&draft, &clipboard)?;
                println!("Copied!");
            }
            Ok(())
        }
        Commands::Films { action } => {
            let mut store = open_store(&data_dir);
            let mut service = VocabularyService::new(&mut store);
            match action.unwrap_or(FilmAction::List) {
                FilmAction::List => print_vocabulary(&service, VocabularyKind::Films),
                FilmAction::Add { name } => print_added(&mut service, VocabularyKind::Films, &name),
            }
        }
        Commands::Labels { action } => {
            let mut store = open_store(&data_dir);
            let mut service = VocabularyService::new(&mut store);
            match action.unwrap_or(LabelAction::List) {
                LabelAction::List => print_vocabulary(&service, VocabularyKind::Labels),
                LabelAction::Add { name } => {
                    print_added(&mut service, VocabularyKind::Labels, &name)
                }
                LabelAction::Clear => {
                    service.clear_labels();
                    println!("Cleared all labels");
                    Ok(())
                }
            }
        }
        Commands::Hashtags { action } => {
            let mut store = open_store(&data_dir);
            let mut service = VocabularyService::new(&mut store);
            match action.unwrap_or(HashtagAction::List) {
                HashtagAction::List => print_vocabulary(&service, VocabularyKind::Hashtags),
                HashtagAction::Add { name } => {
                    print_added(&mut service, VocabularyKind::Hashtags, &name)
                }
                HashtagAction::Remove { name } => {
                    let (entry, removed) = service.remove_hashtag(&name)?;
                    if removed {
                        println!("Removed hashtag '{}'", entry);
                    } else {
                        println!("Hashtag '{}' was not in the list", entry);
                    }
                    Ok(())
                }
            }
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(data_dir);

            if list {
                let config = service.list()?;
                println!("clipboard = {}", config.clipboard_command());
                println!("hashtag_preview = {}", config.hashtag_preview);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: textiq config [--list | <key> [<value>]]");
                println!("Valid keys: clipboard, hashtag_preview");
                Ok(())
            }
        }
    }
}

fn open_store(data_dir: &DataDir) -> PostStore<FileStore> {
    PostStore::load(data_dir.open_defaults())
}

fn clipboard_for(data_dir: &DataDir) -> Result<CommandClipboard, TextiqError> {
    let config = data_dir.load_config()?;
    Ok(CommandClipboard::new(config.get_clipboard()))
}

fn print_vocabulary(
    service: &VocabularyService<'_, FileStore>,
    kind: VocabularyKind,
) -> Result<(), TextiqError> {
    let entries = service.list(kind);
    let (prefix, empty) = match kind {
        VocabularyKind::Films => ("", "No films"),
        VocabularyKind::Labels => ("", "No labels"),
        VocabularyKind::Hashtags => ("#", "No hashtags"),
    };

    let output = format_vocabulary(&entries, prefix, empty);
    if entries.is_empty() {
        println!("{}", output);
    } else {
        print!("{}", output);
    }
    Ok(())
}

fn print_added(
    service: &mut VocabularyService<'_, FileStore>,
    kind: VocabularyKind,
    name: &str,
) -> Result<(), TextiqError> {
    let (entry, added) = service.add(kind, name)?;
    if added {
        println!("Added {} '{}'", kind.noun(), entry);
    } else {
        println!("The {} '{}' is already in the list", kind.noun(), entry);
    }
    Ok(())
}
